#[cfg(test)]
mod tests {
    use crate::core::auth::testing::MockProvider;
    use crate::core::auth::{AuthError, AuthState, SessionGate};
    use crate::core::forms::{FormError, RegistrationForm};
    use crate::core::{HotspotEditor, HotspotKind, Point, RenderedRect};

    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G'];

    fn rect() -> RenderedRect {
        RenderedRect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn loaded_editor() -> HotspotEditor {
        let mut editor = HotspotEditor::new();
        editor
            .load_file("template.png", "image/png", PNG_BYTES)
            .unwrap();
        editor
    }

    fn peterpaul() -> RegistrationForm {
        RegistrationForm {
            username: "peterpaul".to_string(),
            email: "peter.paul@example.com".to_string(),
            password: "Secret123!".to_string(),
            agree_terms: true,
        }
    }

    // ========================================================================
    // Hotspot editor sessions
    // ========================================================================

    #[test]
    fn test_placements_without_removal() {
        let mut editor = loaded_editor();
        let kinds = [
            HotspotKind::Text,
            HotspotKind::Image,
            HotspotKind::Image,
            HotspotKind::Text,
            HotspotKind::Text,
        ];

        for (i, kind) in kinds.iter().enumerate() {
            editor.begin_placement(*kind);
            editor.place_at(Point::new(50.0 * i as f64, 40.0), rect());
        }

        assert_eq!(editor.len(), kinds.len());
        for (i, hotspot) in editor.hotspots().iter().enumerate() {
            let expected = format!("{} {}", kinds[i].label_prefix(), i + 1);
            assert_eq!(hotspot.label, expected);
            assert_eq!(hotspot.kind, kinds[i]);
        }
    }

    #[test]
    fn test_ids_unique_across_session() {
        let mut editor = loaded_editor();
        for _ in 0..10 {
            editor.begin_placement(HotspotKind::Text);
            editor.place_at(Point::new(10.0, 10.0), rect());
        }
        let first = editor.hotspots()[0].id.clone();
        editor.remove(&first);
        editor.begin_placement(HotspotKind::Image);
        editor.place_at(Point::new(10.0, 10.0), rect());

        let mut ids: Vec<&str> = editor.hotspots().iter().map(|h| h.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), editor.len());
    }

    #[test]
    fn test_inactive_clicks_never_change_set() {
        let mut editor = loaded_editor();
        editor.begin_placement(HotspotKind::Text);
        editor.place_at(Point::new(400.0, 300.0), rect());

        for x in [0.0, 100.0, 799.0] {
            editor.place_at(Point::new(x, 10.0), rect());
        }
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_replacing_image_mid_session() {
        let mut editor = loaded_editor();
        editor.begin_placement(HotspotKind::Text);
        editor.place_at(Point::new(400.0, 300.0), rect());

        editor
            .load_file("second.png", "image/png", PNG_BYTES)
            .unwrap();
        assert!(editor.is_empty());

        editor.begin_placement(HotspotKind::Image);
        let hotspot = editor.place_at(Point::new(400.0, 300.0), rect()).unwrap();
        assert_eq!(hotspot.label, "Image 1");
        assert_eq!((hotspot.x, hotspot.y), (50.0, 50.0));
    }

    // ========================================================================
    // Registration and session scenarios
    // ========================================================================

    #[tokio::test]
    async fn test_registration_logs_in() {
        let mut gate = SessionGate::new(MockProvider::new());

        let identity = gate.submit_registration(&peterpaul()).await.unwrap();

        assert_eq!(identity.name, "peterpaul");
        assert_eq!(identity.email, "peter.paul@example.com");
        assert_eq!(gate.state(), &AuthState::Authenticated(identity));
        assert!(gate.provider().has_session());
    }

    #[tokio::test]
    async fn test_registration_login_failure_is_composed() {
        let provider = MockProvider::new();
        provider.fail_next("create_session");
        let mut gate = SessionGate::new(provider);

        let err = gate.submit_registration(&peterpaul()).await.unwrap_err();

        assert!(matches!(err, AuthError::RegisteredButLoginFailed { .. }));
        assert_eq!(gate.state(), &AuthState::Unauthenticated);
        // The account itself exists
        assert_eq!(gate.provider().account_count(), 1);
    }

    #[tokio::test]
    async fn test_registration_identity_fetch_failure_is_composed() {
        let provider = MockProvider::new();
        provider.fail_next("get_current_user");
        let mut gate = SessionGate::new(provider);

        let err = gate.submit_registration(&peterpaul()).await.unwrap_err();

        assert!(matches!(err, AuthError::RegisteredButLoginFailed { .. }));
        assert!(!gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_unchecked_terms_never_create_account() {
        let mut gate = SessionGate::new(MockProvider::new());
        let mut form = peterpaul();
        form.agree_terms = false;

        let err = gate.submit_registration(&form).await.unwrap_err();

        assert_eq!(err, AuthError::Validation(FormError::TermsNotAccepted));
        assert_eq!(gate.provider().calls("create_account"), 0);
        assert_eq!(gate.provider().account_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_fields_never_create_account() {
        let mut gate = SessionGate::new(MockProvider::new());
        let form = RegistrationForm::default();

        let err = gate.submit_registration(&form).await.unwrap_err();

        assert!(matches!(
            err,
            AuthError::Validation(FormError::MissingFields(_))
        ));
        assert_eq!(gate.provider().calls("create_account"), 0);
    }

    #[tokio::test]
    async fn test_full_session_lifecycle() {
        let mut gate = SessionGate::new(MockProvider::new());
        assert!(gate.restore().await.is_none());

        gate.submit_registration(&peterpaul()).await.unwrap();
        gate.logout().await.unwrap();
        assert!(!gate.is_authenticated());

        let identity = gate
            .login("peter.paul@example.com", "Secret123!")
            .await
            .unwrap();
        assert_eq!(identity.name, "peterpaul");
        assert_eq!(gate.provider().calls("create_account"), 1);
    }
}
