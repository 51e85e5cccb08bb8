//! Field flags for interactive form fields.
//!
//! Bit positions follow ISO 32000-1:2008 Section 12.7.3 so a writer can emit
//! them directly as the field's `/Ff` entry.

use bitflags::{bitflags, Flags};
use serde::Serializer;

bitflags! {
    /// Text field flags (field type Tx).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextFieldFlags: u32 {
        /// Bit 1: Field is read-only
        const READ_ONLY = 1 << 0;
        /// Bit 2: Field is required
        const REQUIRED = 1 << 1;

        /// Bit 13: Text may include multiple lines
        const MULTILINE = 1 << 12;
    }
}

bitflags! {
    /// Button field flags (field type Btn).
    ///
    /// A button with neither RADIO nor PUSHBUTTON set is a checkbox.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ButtonFieldFlags: u32 {
        /// Bit 1: Field is read-only
        const READ_ONLY = 1 << 0;
        /// Bit 2: Field is required
        const REQUIRED = 1 << 1;

        /// Bit 15: At least one button in the group must be on
        const NO_TOGGLE_TO_OFF = 1 << 14;

        /// Bit 16: This is a radio button
        const RADIO = 1 << 15;
    }
}

bitflags! {
    /// Choice field flags (field type Ch).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ChoiceFieldFlags: u32 {
        /// Bit 1: Field is read-only
        const READ_ONLY = 1 << 0;
        /// Bit 2: Field is required
        const REQUIRED = 1 << 1;

        /// Bit 18: Combo box (dropdown); list box when clear
        const COMBO = 1 << 17;

        /// Bit 19: (combo only) User may enter custom text
        const EDIT = 1 << 18;
    }
}

/// Serialize any of the flag sets as its raw `/Ff` integer.
pub(crate) fn serialize_bits<F, S>(flags: &F, serializer: S) -> Result<S::Ok, S::Error>
where
    F: Flags<Bits = u32>,
    S: Serializer,
{
    serializer.serialize_u32(flags.bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_flags_bits() {
        assert_eq!(TextFieldFlags::READ_ONLY.bits(), 1);
        assert_eq!(TextFieldFlags::MULTILINE.bits(), 1 << 12);
    }

    #[test]
    fn test_button_field_flags_bits() {
        assert_eq!(ButtonFieldFlags::RADIO.bits(), 1 << 15);
        assert_eq!(ButtonFieldFlags::NO_TOGGLE_TO_OFF.bits(), 1 << 14);
    }

    #[test]
    fn test_choice_field_flags_bits() {
        assert_eq!(ChoiceFieldFlags::COMBO.bits(), 1 << 17);
        assert_eq!(ChoiceFieldFlags::EDIT.bits(), 1 << 18);
    }

    #[test]
    fn test_combined_flags() {
        let flags = TextFieldFlags::REQUIRED | TextFieldFlags::MULTILINE;
        assert!(flags.contains(TextFieldFlags::MULTILINE));
        assert!(!flags.contains(TextFieldFlags::READ_ONLY));
    }

    #[test]
    fn test_flags_serialize_as_integers() {
        #[derive(serde::Serialize)]
        struct Holder {
            #[serde(serialize_with = "serialize_bits")]
            flags: ButtonFieldFlags,
        }
        let json = serde_json::to_string(&Holder {
            flags: ButtonFieldFlags::RADIO | ButtonFieldFlags::NO_TOGGLE_TO_OFF,
        })
        .unwrap();
        assert_eq!(json, format!("{{\"flags\":{}}}", (1u32 << 15) | (1 << 14)));
    }

    #[test]
    fn test_default_flags() {
        assert_eq!(TextFieldFlags::default(), TextFieldFlags::empty());
        assert_eq!(ButtonFieldFlags::default(), ButtonFieldFlags::empty());
        assert_eq!(ChoiceFieldFlags::default(), ChoiceFieldFlags::empty());
    }
}
