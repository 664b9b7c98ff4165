//! Screen identifiers used on the host wire.

/// Shell screens known to the host.
///
/// The wire names match what the host expects in `login_ui_state_changed`
/// and `login_visible` notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// External identity-provider sign-in frame.
    GaiaSignin,
    /// Saved-account pod picker.
    AccountPicker,
    /// Post-login avatar picker (prefetched by the sign-in screen).
    UserImagePicker,
    /// Language and input-method options panel.
    Languages,
}

impl ScreenId {
    /// Wire name of the screen.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GaiaSignin => "gaia-signin",
            Self::AccountPicker => "account-picker",
            Self::UserImagePicker => "user-image",
            Self::Languages => "languages",
        }
    }

    /// All screens in declaration order.
    pub const ALL: &[ScreenId] = &[
        ScreenId::GaiaSignin,
        ScreenId::AccountPicker,
        ScreenId::UserImagePicker,
        ScreenId::Languages,
    ];
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(ScreenId::GaiaSignin.as_str(), "gaia-signin");
        assert_eq!(ScreenId::AccountPicker.as_str(), "account-picker");
        assert_eq!(ScreenId::UserImagePicker.as_str(), "user-image");
        assert_eq!(ScreenId::Languages.as_str(), "languages");
    }

    #[test]
    fn display_matches_wire_name() {
        for id in ScreenId::ALL {
            assert_eq!(format!("{id}"), id.as_str());
        }
    }

    #[test]
    fn wire_names_are_unique() {
        for (i, a) in ScreenId::ALL.iter().enumerate() {
            for b in &ScreenId::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
