// Copyright (C) 2020-2024 Andy Kurnia.

// failures a caller can recover from: a position typed into the shell or sent
// as json that is not a legal duel, a csv table that does not load back, bad
// command-line arguments. a malformed state built through DuelState::new and
// an equal-strength collision inside the solver are bugs and panic instead.

// the message is shown as-is by the shell and the binaries.
pub struct DuelError {
    s: String,
}

impl std::fmt::Display for DuelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.s)
    }
}

// main() returning Err prints Debug, so keep it the same as Display.
impl std::fmt::Debug for DuelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.s)
    }
}

impl std::error::Error for DuelError {}

pub fn new(s: String) -> DuelError {
    DuelError { s }
}

// csv, json, io and DuelError all box into this.
pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

// return_error!(msg) leaves the current fn with a DuelError.
#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails(x: u8) -> Returns<u8> {
        if x == 0 {
            return_error!(format!("bad value {}", x));
        }
        Ok(x)
    }

    #[test]
    fn return_error_formats_message() {
        assert_eq!(fails(3).unwrap(), 3);
        assert_eq!(fails(0).unwrap_err().to_string(), "bad value 0");
    }

    #[test]
    fn debug_matches_display() {
        let err = new("malformed state: chosen 3 invalid".to_string());
        assert_eq!(format!("{:?}", err), format!("{}", err));
    }
}
