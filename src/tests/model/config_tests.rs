    use super::*;

    #[test]
    fn overrides_win_and_trailing_slash_is_trimmed() {
        let cfg = GalleryConfig::default().with_overrides(
            Some("http://api.local/".to_string()),
            Some("https://host.local/upload/".to_string()),
            None,
        );
        assert_eq!(cfg.api_url, "http://api.local");
        assert_eq!(cfg.upload_url.as_deref(), Some("https://host.local/upload"));
        assert_eq!(cfg.upload_key, None);
    }

    #[test]
    fn missing_overrides_keep_file_values() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("gallery.json");
        std::fs::write(
            &path,
            r#"{"api_url": "http://from-file/", "upload_url": "http://host", "upload_key": "k"}"#,
        )?;

        let cfg = GalleryConfig::load(&path)?.with_overrides(None, None, None);
        assert_eq!(cfg.api_url, "http://from-file");
        assert_eq!(cfg.upload_url.as_deref(), Some("http://host"));
        assert_eq!(cfg.upload_key.as_deref(), Some("k"));
        Ok(())
    }

    #[test]
    fn load_reports_the_path_on_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        let err = GalleryConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parse config"));
    }
