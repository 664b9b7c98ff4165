//! Auth frame load parameters and frame URL composition.

use url::form_urlencoded::Serializer;

/// Parameter bag for loading or updating the sign-in frame.
///
/// Mirrors the payload the host pushes with a load request. Only the
/// whitelisted fields below ever reach the frame URL; the boolean flags
/// drive screen chrome, not navigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthFrameParams {
    /// Base URL of the identity provider's sign-in page.
    pub start_url: String,
    /// Identity-provider origin override.
    pub gaia_origin: Option<String>,
    /// Path suffix below the origin.
    pub gaia_url_path: Option<String>,
    /// UI locale, passed as `hl`.
    pub locale: Option<String>,
    /// Localized strings forwarded to the frame, in order.
    pub localized_strings: Vec<(String, String)>,
    /// Email to prefill.
    pub email: Option<String>,
    /// Test-automation email.
    pub test_email: Option<String>,
    /// Test-automation password.
    pub test_password: Option<String>,
    /// Navigate even if the URL is unchanged.
    pub force_reload: bool,
    /// Load without presenting loading chrome.
    pub silent_load: bool,
    /// Use the local (offline) sign-in page.
    pub is_local: bool,
    /// Show the "password changed" reason label.
    pub password_changed: bool,
    /// Offer account creation.
    pub create_account: bool,
    /// Offer guest sign-in.
    pub guest_signin: bool,
    /// Offer managed-user creation.
    pub create_managed_user: bool,
    /// Whether saved user pods may be shown at all.
    pub is_show_users: bool,
    /// Number of saved user pods available.
    pub user_pod_count: usize,
}

impl AuthFrameParams {
    /// Compose the frame navigation URL from the whitelisted parameters.
    ///
    /// Values are URL-encoded; parameters keep the host's push order so the
    /// same bag always produces the same URL (the controller relies on
    /// string equality to detect redundant loads).
    pub fn frame_url(&self) -> String {
        fn present(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|v| !v.is_empty())
        }

        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if let Some(v) = present(&self.gaia_origin) {
            pairs.push(("gaiaOrigin", v));
        }
        if let Some(v) = present(&self.gaia_url_path) {
            pairs.push(("gaiaUrlPath", v));
        }
        if let Some(v) = present(&self.locale) {
            pairs.push(("hl", v));
        }
        for (name, value) in &self.localized_strings {
            pairs.push((name, value));
        }
        if let Some(v) = present(&self.email) {
            pairs.push(("email", v));
        }
        if let Some(v) = present(&self.test_email) {
            pairs.push(("test_email", v));
        }
        if let Some(v) = present(&self.test_password) {
            pairs.push(("test_password", v));
        }

        if pairs.is_empty() {
            return self.start_url.clone();
        }

        let mut query = Serializer::new(String::new());
        for (name, value) in pairs {
            query.append_pair(name, value);
        }
        format!("{}?{}", self.start_url, query.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_url_without_parameters() {
        let params = AuthFrameParams {
            start_url: "https://idp.example/auth".into(),
            ..Default::default()
        };
        assert_eq!(params.frame_url(), "https://idp.example/auth");
    }

    #[test]
    fn email_is_url_encoded() {
        let params = AuthFrameParams {
            start_url: "https://idp.example/auth".into(),
            email: Some("a@b.com".into()),
            ..Default::default()
        };
        assert_eq!(
            params.frame_url(),
            "https://idp.example/auth?email=a%40b.com"
        );
    }

    #[test]
    fn parameters_keep_push_order() {
        let params = AuthFrameParams {
            start_url: "https://idp.example/auth".into(),
            gaia_origin: Some("https://idp.example".into()),
            locale: Some("fr".into()),
            email: Some("a@b.com".into()),
            ..Default::default()
        };
        assert_eq!(
            params.frame_url(),
            "https://idp.example/auth\
             ?gaiaOrigin=https%3A%2F%2Fidp.example&hl=fr&email=a%40b.com"
        );
    }

    #[test]
    fn localized_strings_land_between_locale_and_email() {
        let params = AuthFrameParams {
            start_url: "https://idp.example/auth".into(),
            locale: Some("en".into()),
            localized_strings: vec![
                ("signinTitle".into(), "Sign in".into()),
                ("continueText".into(), "Continue".into()),
            ],
            email: Some("a@b.com".into()),
            ..Default::default()
        };
        assert_eq!(
            params.frame_url(),
            "https://idp.example/auth?hl=en&signinTitle=Sign+in\
             &continueText=Continue&email=a%40b.com"
        );
    }

    #[test]
    fn empty_values_are_skipped() {
        let params = AuthFrameParams {
            start_url: "https://idp.example/auth".into(),
            gaia_origin: Some(String::new()),
            email: Some("a@b.com".into()),
            ..Default::default()
        };
        assert_eq!(
            params.frame_url(),
            "https://idp.example/auth?email=a%40b.com"
        );
    }

    #[test]
    fn same_bag_same_url() {
        let params = AuthFrameParams {
            start_url: "https://idp.example/auth".into(),
            locale: Some("ja".into()),
            localized_strings: vec![("a".into(), "1".into())],
            ..Default::default()
        };
        assert_eq!(params.frame_url(), params.clone().frame_url());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_params() -> impl Strategy<Value = AuthFrameParams> {
            (
                proptest::option::of("[a-zA-Z0-9 @/:.+&=-]{0,20}"),
                proptest::option::of("[a-z]{2,5}"),
                proptest::collection::vec(("[a-zA-Z]{1,8}", "[a-zA-Z0-9 ]{0,12}"), 0..4),
            )
                .prop_map(|(email, locale, localized_strings)| AuthFrameParams {
                    start_url: "https://idp.example/auth".into(),
                    email,
                    locale,
                    localized_strings,
                    ..Default::default()
                })
        }

        proptest! {
            #[test]
            fn url_is_deterministic(params in arb_params()) {
                prop_assert_eq!(params.frame_url(), params.frame_url());
            }

            #[test]
            fn url_always_extends_the_start_url(params in arb_params()) {
                let url = params.frame_url();
                prop_assert!(url.starts_with(&params.start_url));
                let suffix = &url[params.start_url.len()..];
                prop_assert!(suffix.is_empty() || suffix.starts_with('?'));
            }

            #[test]
            fn query_never_contains_raw_spaces(params in arb_params()) {
                prop_assert!(!params.frame_url().contains(' '));
            }
        }
    }
}
