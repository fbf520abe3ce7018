//! Overflow-free modular arithmetic on primitive integers.
//!
//! Every result lies in `[0, n)`. Signed inputs are reduced with Euclidean
//! remainder first, so `-1 mod 7 == 6`. A modulus that is zero or negative
//! panics, matching primitive division by zero.

pub(crate) trait ModArith: Copy + Ord {
    fn reduce(self, n: Self) -> Self;
    fn add_mod(self, rhs: Self, n: Self) -> Self;
    fn sub_mod(self, rhs: Self, n: Self) -> Self;
    fn mul_mod(self, rhs: Self, n: Self) -> Self;
    fn pow_mod(self, exp: Self, n: Self) -> Self;
    fn inv_mod(self, n: Self) -> Option<Self>;
}

macro_rules! impl_mod_arith {
    (@shared $t:ty) => {
        #[inline]
        fn reduce(self, n: Self) -> Self {
            assert!(n > 0, "modulus must be positive");
            self.rem_euclid(n)
        }

        fn add_mod(self, rhs: Self, n: Self) -> Self {
            let a = self.reduce(n);
            let b = rhs.reduce(n);
            // a + b may not fit; compare against the gap instead.
            if a >= n - b {
                a - (n - b)
            } else {
                a + b
            }
        }

        fn sub_mod(self, rhs: Self, n: Self) -> Self {
            let a = self.reduce(n);
            let b = rhs.reduce(n);
            if a >= b {
                a - b
            } else {
                n - (b - a)
            }
        }

        fn pow_mod(self, exp: Self, n: Self) -> Self {
            let base = self.reduce(n);
            let one: $t = 1;
            let mut acc = one.reduce(n);
            for i in (0..<$t>::BITS).rev() {
                acc = acc.mul_mod(acc, n);
                if (exp >> i) & 1 == 1 {
                    acc = acc.mul_mod(base, n);
                }
            }
            acc
        }

        fn inv_mod(self, n: Self) -> Option<Self> {
            let one: $t = 1;
            let (mut r0, mut r1) = (n, self.reduce(n));
            let (mut t0, mut t1): ($t, $t) = (0, one.reduce(n));
            while r1 != 0 {
                let q = r0 / r1;
                let r2 = r0 - q * r1;
                r0 = r1;
                r1 = r2;
                let t2 = t0.sub_mod(q.mul_mod(t1, n), n);
                t0 = t1;
                t1 = t2;
            }
            if r0 == 1 {
                Some(t0)
            } else {
                None
            }
        }
    };
    // Widths up to 64 bits multiply through a 128-bit intermediate.
    ($t:ty, wide = $wide:ty) => {
        impl ModArith for $t {
            impl_mod_arith!(@shared $t);

            fn mul_mod(self, rhs: Self, n: Self) -> Self {
                let a = self.reduce(n) as $wide;
                let b = rhs.reduce(n) as $wide;
                ((a * b) % (n as $wide)) as $t
            }
        }
    };
    // 128-bit widths fall back to double-and-add.
    ($t:ty) => {
        impl ModArith for $t {
            impl_mod_arith!(@shared $t);

            fn mul_mod(self, rhs: Self, n: Self) -> Self {
                let a = self.reduce(n);
                let b = rhs.reduce(n);
                let mut acc: $t = 0;
                for i in (0..<$t>::BITS).rev() {
                    acc = acc.add_mod(acc, n);
                    if (b >> i) & 1 == 1 {
                        acc = acc.add_mod(a, n);
                    }
                }
                acc
            }
        }
    };
}

impl_mod_arith!(u8, wide = u128);
impl_mod_arith!(u16, wide = u128);
impl_mod_arith!(u32, wide = u128);
impl_mod_arith!(u64, wide = u128);
impl_mod_arith!(u128);

impl_mod_arith!(i8, wide = i128);
impl_mod_arith!(i16, wide = i128);
impl_mod_arith!(i32, wide = i128);
impl_mod_arith!(i64, wide = i128);
impl_mod_arith!(i128);
