// Copyright (C) 2020-2024 Andy Kurnia.

// Fast insecure non-cryptographic hash for strategy table keys.
// Keys are short byte strings (strengths 1..=k), so byte-at-a-time is fine.

pub struct FashHasher(u64);

impl std::hash::Hasher for FashHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        // spread the low bits, HashMap buckets by them
        let x = self.0 ^ (self.0 >> 29);
        x.wrapping_mul(0xbf58476d1ce4e5b9) ^ (x >> 32)
    }

    #[inline(always)]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = self.0.wrapping_mul(3467) ^ (!b as u64);
        }
    }

    #[inline(always)]
    fn write_u8(&mut self, b: u8) {
        self.0 = self.0.wrapping_mul(3467) ^ (!b as u64);
    }

    #[inline(always)]
    fn write_usize(&mut self, n: usize) {
        // only ever a slice length here
        self.0 = self.0.wrapping_mul(3467) ^ (n as u64).wrapping_add(0x9e);
    }
}

impl Default for FashHasher {
    fn default() -> FashHasher {
        FashHasher(0)
    }
}

pub type FashHasherDefault = std::hash::BuildHasherDefault<FashHasher>;
pub type FashMap<K, V> = std::collections::HashMap<K, V, FashHasherDefault>;
pub type FashSet<T> = std::collections::HashSet<T, FashHasherDefault>;
