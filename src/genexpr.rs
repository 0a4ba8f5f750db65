// SPDX-License-Identifier: Unlicense
//! Random calculator input, for stress-testing the tokenizer and parser.
//!
//! Output is always valid calculator syntax. The same seed always produces
//! the same text.

/// xoshiro256++ seeded through splitmix64.
#[derive(Debug, Clone)]
pub struct Rng {
    state: [u64; 4],
}

fn splitmix64(seed: u64) -> u64 {
    let seed = (seed ^ (seed >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    let seed = (seed ^ (seed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    seed ^ (seed >> 31)
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        let mut state = [0; 4];
        let mut seed = seed;
        for word in state.iter_mut() {
            seed = splitmix64(seed);
            *word = seed;
        }
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let s = &mut self.state;
        let result = s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0]);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = s[3].rotate_left(45);

        result
    }

    /// Uniform value in `min..=max`.
    pub fn range(&mut self, min: u64, max: u64) -> u64 {
        debug_assert!(min <= max);
        let span = (max - min).wrapping_add(1);
        if span == 0 {
            return self.next_u64();
        }
        loop {
            let x = self.next_u64();
            let r = x % span;
            // Reject draws from the incomplete bucket at the top of the range.
            if x - r <= span.wrapping_neg() {
                return r + min;
            }
        }
    }

    /// Uniform index in `0..len`.
    fn pick(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

const BINARY_OPS: [&str; 6] = [" + ", " - ", " * ", " / ", " % ", " ** "];
const UNARY_OPS: [&str; 2] = ["+", "-"];

/// Builds one random expression by recursive expansion.
///
/// `max_depth` bounds the unary and binary forms: once reached, they take
/// literal operands. Plain re-expansion is not bounded by depth, but it stops
/// with probability 1.
pub struct Generator {
    rng: Rng,
    max_depth: u32,
}

impl Generator {
    pub fn new(rng: Rng, max_depth: u32) -> Self {
        Self { rng, max_depth }
    }

    pub fn generate(&mut self) -> String {
        let mut out = String::new();
        self.expr(&mut out, 0);
        out
    }

    fn expr(&mut self, out: &mut String, depth: u32) {
        match self.rng.next_u64() % 4 {
            0 => self.unary(out, depth + 1),
            1 => self.binary(out, depth + 1),
            2 => self.expr(out, depth + 1),
            _ => self.paren(out, depth + 1),
        }
    }

    fn literal(&mut self, out: &mut String) {
        out.push_str(&self.rng.range(1, 100).to_string());
    }

    fn binary(&mut self, out: &mut String, depth: u32) {
        let op = BINARY_OPS[self.rng.pick(BINARY_OPS.len())];
        if depth + 1 >= self.max_depth {
            self.literal(out);
            out.push_str(op);
            self.literal(out);
        } else {
            self.expr(out, depth + 1);
            out.push_str(op);
            self.expr(out, depth + 1);
        }
    }

    fn unary(&mut self, out: &mut String, depth: u32) {
        let op = UNARY_OPS[self.rng.pick(UNARY_OPS.len())];
        out.push_str(op);
        if depth + 1 >= self.max_depth {
            self.literal(out);
        } else {
            self.expr(out, depth + 1);
        }
    }

    fn paren(&mut self, out: &mut String, depth: u32) {
        out.push('(');
        self.binary(out, depth + 1);
        out.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitmix_reference_values() {
        // First outputs of the reference splitmix64 stream seeded with 0,
        // where each step first adds the golden gamma.
        let gamma = 0x9E37_79B9_7F4A_7C15_u64;
        assert_eq!(splitmix64(gamma), 0xE220_A839_7B1D_CDAF);
        assert_eq!(splitmix64(gamma.wrapping_mul(2)), 0x6E78_9E6A_A1B9_65F4);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        let mut c = Rng::new(43);
        let xs: Vec<_> = (0..16).map(|_| a.next_u64()).collect();
        let ys: Vec<_> = (0..16).map(|_| b.next_u64()).collect();
        let zs: Vec<_> = (0..16).map(|_| c.next_u64()).collect();
        assert_eq!(xs, ys);
        assert_ne!(xs, zs);
    }

    #[test]
    fn range_is_inclusive_and_bounded() {
        let mut rng = Rng::new(7);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let v = rng.range(5, 10);
            assert!((5..=10).contains(&v));
            seen[(v - 5) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(rng.range(3, 3), 3);
        let _ = rng.range(0, u64::MAX);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = Generator::new(Rng::new(1234), 10).generate();
        let b = Generator::new(Rng::new(1234), 10).generate();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn depth_one_yields_only_flat_forms() {
        for seed in 0..50 {
            let text = Generator::new(Rng::new(seed), 1).generate();
            assert!(text.chars().any(|c| c.is_ascii_digit()), "{text:?}");
            assert!(
                text.chars().all(|c| c.is_ascii_digit() || " +-*/%()".contains(c)),
                "{text:?}"
            );
        }
    }
}
