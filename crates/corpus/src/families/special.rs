//! IEEE-754 special values: NaN, infinities, signed zero, subnormals.

use crate::{
    builder::SeedContext,
    catalog::Catalog,
    constants::{DIM, MAX_SUBNORMAL, MIN_POSITIVE_SUBNORMAL, NEGATIVE_NAN, SIGNALING_NAN},
    error::CorpusResult,
    seed::Category,
    vector::{self, Vector},
};

/// How a special seed lays its values out.
enum Layout {
    /// Every element is the value.
    Fill(f32),
    /// `value` at `index`, every other element is `rest`.
    At { index: usize, value: f32, rest: f32 },
    /// Even indices `even`, odd indices `odd`.
    Interleave { even: f32, odd: f32 },
}

impl Layout {
    const fn at(index: usize, value: f32, rest: f32) -> Self {
        Self::At { index, value, rest }
    }

    const fn interleave(even: f32, odd: f32) -> Self {
        Self::Interleave { even, odd }
    }

    fn build(&self) -> Vector {
        match *self {
            Layout::Fill(v) => vector::splat(v),
            Layout::At { index, value, rest } => {
                vector::from_fn(|i| if i == index { value } else { rest })
            }
            Layout::Interleave { even, odd } => {
                vector::from_fn(|i| if i % 2 == 0 { even } else { odd })
            }
        }
    }
}

const SPECIALS: &[(&str, Layout)] = &[
    ("all_nan", Layout::Fill(f32::NAN)),
    ("first_nan", Layout::at(0, f32::NAN, 1.0)),
    ("last_nan", Layout::at(DIM - 1, f32::NAN, 1.0)),
    ("all_neg_nan", Layout::Fill(NEGATIVE_NAN)),
    ("all_signaling_nan", Layout::Fill(SIGNALING_NAN)),
    ("all_inf", Layout::Fill(f32::INFINITY)),
    ("all_neg_inf", Layout::Fill(f32::NEG_INFINITY)),
    (
        "mixed_inf",
        Layout::interleave(f32::INFINITY, f32::NEG_INFINITY),
    ),
    ("all_neg_zero", Layout::Fill(-0.0)),
    ("mixed_zero_neg_zero", Layout::interleave(0.0, -0.0)),
    ("all_subnormal", Layout::Fill(MIN_POSITIVE_SUBNORMAL)),
    ("all_neg_subnormal", Layout::Fill(-MIN_POSITIVE_SUBNORMAL)),
    ("all_max_subnormal", Layout::Fill(MAX_SUBNORMAL)),
];

pub fn populate(_ctx: &mut SeedContext, catalog: &mut Catalog) -> CorpusResult<()> {
    for (name, layout) in SPECIALS {
        catalog.insert_vector(*name, Category::Special, &layout.build())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::decode_f32s;

    fn decoded(catalog: &Catalog, name: &str) -> Vec<f32> {
        decode_f32s(catalog.get(name).expect("seed present").payload()).expect("aligned")
    }

    fn specials() -> Catalog {
        let mut catalog = Catalog::new();
        populate(&mut SeedContext::new(0), &mut catalog).expect("populate");
        catalog
    }

    #[test]
    fn test_nan_positions() {
        let catalog = specials();

        let first = decoded(&catalog, "first_nan");
        assert!(first[0].is_nan());
        assert!(first[1..].iter().all(|v| *v == 1.0));

        let last = decoded(&catalog, "last_nan");
        assert!(last[DIM - 1].is_nan());
        assert!(last[..DIM - 1].iter().all(|v| *v == 1.0));
    }

    #[test]
    fn test_nan_payload_bits_survive() {
        let catalog = specials();
        assert!(decoded(&catalog, "all_signaling_nan")
            .iter()
            .all(|v| v.to_bits() == 0x7f80_0001));
        assert!(decoded(&catalog, "all_neg_nan")
            .iter()
            .all(|v| v.to_bits() == 0xffc0_0000));
    }

    #[test]
    fn test_signed_zero_interleave() {
        let vals = decoded(&specials(), "mixed_zero_neg_zero");
        for (i, v) in vals.iter().enumerate() {
            assert_eq!(*v, 0.0);
            assert_eq!(v.is_sign_negative(), i % 2 == 1);
        }
    }

    #[test]
    fn test_subnormals_are_smallest_magnitude() {
        let catalog = specials();
        assert!(decoded(&catalog, "all_subnormal")
            .iter()
            .all(|v| v.to_bits() == 0x0000_0001));
        assert!(decoded(&catalog, "all_neg_subnormal")
            .iter()
            .all(|v| v.to_bits() == 0x8000_0001));
    }
}
