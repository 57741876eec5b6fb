//! Property-based invariant tests for the composite 16-bit panel.
//!
//! 1. `set_value` round-trips through the four nibble fields.
//! 2. The composite value always equals the nibble concatenation.
//! 3. One tick moves the composite value by exactly ±1 modulo 2^16.
//! 4. `flip_switch` changes exactly one bit position.
//! 5. Mode switches never change the composite value.

use nixie_core::Mode;
use nixie_runtime::SixteenBitPanel;
use proptest::prelude::*;

proptest! {
    #[test]
    fn set_value_roundtrip(v in any::<u16>()) {
        let mut panel = SixteenBitPanel::new();
        panel.set_value(v).unwrap();
        prop_assert_eq!(panel.value(), v);
    }

    #[test]
    fn value_matches_nibble_concatenation(v in any::<u16>()) {
        let mut panel = SixteenBitPanel::new();
        panel.set_value(v).unwrap();
        let [n0, n1, n2, n3] = panel.nibble_values();
        let composed = (u16::from(n0) << 12)
            | (u16::from(n1) << 8)
            | (u16::from(n2) << 4)
            | u16::from(n3);
        prop_assert_eq!(composed, v);
    }

    #[test]
    fn increment_tick_is_plus_one_mod_65536(v in any::<u16>()) {
        let mut panel = SixteenBitPanel::new();
        panel.set_value(v).unwrap();
        panel.set_mode(Mode::AutoIncrement);
        panel.tick().unwrap();
        prop_assert_eq!(panel.value(), v.wrapping_add(1));
    }

    #[test]
    fn decrement_tick_is_minus_one_mod_65536(v in any::<u16>()) {
        let mut panel = SixteenBitPanel::new();
        panel.set_value(v).unwrap();
        panel.set_mode(Mode::AutoDecrement);
        panel.tick().unwrap();
        prop_assert_eq!(panel.value(), v.wrapping_sub(1));
    }

    #[test]
    fn flip_switch_changes_exactly_one_bit(v in any::<u16>(), index in 0usize..16) {
        let mut panel = SixteenBitPanel::new();
        panel.set_value(v).unwrap();
        let before = panel.bits();
        prop_assert!(panel.flip_switch(index).unwrap());
        let after = panel.bits();
        for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
            if i == index {
                prop_assert_ne!(b, a);
            } else {
                prop_assert_eq!(b, a);
            }
        }
    }

    #[test]
    fn mode_switch_preserves_value(v in any::<u16>()) {
        let mut panel = SixteenBitPanel::new();
        panel.set_value(v).unwrap();
        panel.set_mode(Mode::AutoDecrement);
        prop_assert_eq!(panel.value(), v);
        panel.set_mode(Mode::AutoIncrement);
        prop_assert_eq!(panel.value(), v);
        panel.set_mode(Mode::Interactive);
        prop_assert_eq!(panel.value(), v);
    }
}
