    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::model::ImageId;
    use crate::notice::NoticeLevel;

    struct FakeHost {
        url: String,
        calls: Cell<usize>,
    }

    impl ImageHost for FakeHost {
        fn host(&self, _file: &FileSelection) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.url.clone())
        }
    }

    struct FakeCreator {
        fail: bool,
        seen: RefCell<Vec<NewImage>>,
    }

    impl FakeCreator {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl ImageCreator for FakeCreator {
        fn create(&self, image: &NewImage) -> Result<ImageRecord> {
            self.seen.borrow_mut().push(image.clone());
            if self.fail {
                anyhow::bail!("server said no");
            }
            Ok(ImageRecord {
                id: ImageId("new".to_string()),
                title: image.title.clone(),
                description: image.description.clone(),
                url: image.url.clone(),
                ts: 1,
            })
        }
    }

    fn png() -> FileSelection {
        FileSelection::new("sunset.png", "image/png", vec![0u8; 32])
    }

    fn filled_form() -> UploadForm {
        let mut form = UploadForm::new();
        form.title = "Sunset".to_string();
        form.description = "A nice view".to_string();
        form
    }

    #[test]
    fn hosted_form_creates_record_and_invalidates() {
        let host = FakeHost {
            url: "https://img.host/sunset.png".to_string(),
            calls: Cell::new(0),
        };
        let creator = FakeCreator::new(false);
        let mut form = filled_form();
        form.select_and_host(png(), &host).unwrap();
        assert_eq!(form.pending_url(), Some("https://img.host/sunset.png"));

        let outcome = submit(&mut form, &creator).unwrap();
        assert_eq!(outcome.notice.level, NoticeLevel::Success);
        assert!(outcome.invalidate);
        assert_eq!(
            creator.seen.borrow()[0],
            NewImage {
                title: "Sunset".to_string(),
                description: "A nice view".to_string(),
                url: "https://img.host/sunset.png".to_string(),
            }
        );

        assert!(form.title.is_empty());
        assert!(form.description.is_empty());
        assert!(form.file().is_none());
        assert!(form.pending_url().is_none());
    }

    #[test]
    fn missing_hosted_image_aborts_without_request_and_resets() {
        let creator = FakeCreator::new(false);
        let mut form = filled_form();
        form.select_file(png()).unwrap();

        let outcome = submit(&mut form, &creator).unwrap();
        assert!(outcome.notice.is_error());
        assert_eq!(outcome.notice.title, "Image not added");
        assert!(!outcome.invalidate);
        assert!(creator.seen.borrow().is_empty());
        assert!(form.title.is_empty());
    }

    #[test]
    fn failed_create_reports_generic_error_and_keeps_cache() {
        let creator = FakeCreator::new(true);
        let mut form = filled_form();
        let ticket = form.select_file(png()).unwrap();
        form.finish_hosting(ticket, "https://img.host/a.png".to_string());

        let outcome = submit(&mut form, &creator).unwrap();
        assert_eq!(outcome.notice.title, "Registration failed");
        assert!(!outcome.invalidate);
        assert!(outcome.created.is_none());
        assert!(form.pending_url().is_none());
    }

    #[test]
    fn validation_failure_blocks_and_keeps_fields() {
        let creator = FakeCreator::new(false);
        let mut form = UploadForm::new();
        form.title = "x".to_string();
        form.description = "fine".to_string();

        let errs = submit(&mut form, &creator).unwrap_err();
        assert_eq!(errs.title, Some(FieldError::TitleTooShort));
        assert_eq!(errs.image, Some(FieldError::ImageRequired));
        assert_eq!(form.title, "x");
        assert!(creator.seen.borrow().is_empty());
    }

    #[test]
    fn invalid_file_is_not_hosted() {
        let host = FakeHost {
            url: "u".to_string(),
            calls: Cell::new(0),
        };
        let mut form = filled_form();
        let gif_too_big = FileSelection {
            name: "big.gif".to_string(),
            mime: "image/gif".to_string(),
            size: 15_000_000,
            bytes: Vec::new(),
        };

        let err = form.select_and_host(gif_too_big, &host).unwrap_err();
        assert!(err.to_string().contains("10MB"));
        assert_eq!(host.calls.get(), 0);
        assert!(form.pending_url().is_none());
    }

    #[test]
    fn late_hosting_result_for_replaced_file_is_ignored() {
        let mut form = filled_form();
        let first = form.select_file(png()).unwrap();
        let second = form.select_file(png()).unwrap();

        assert!(!form.finish_hosting(first, "https://old".to_string()));
        assert!(form.pending_url().is_none());
        assert!(form.finish_hosting(second, "https://new".to_string()));
        assert_eq!(form.pending_url(), Some("https://new"));
    }

    #[test]
    fn selecting_a_new_file_clears_the_pending_url() {
        let mut form = filled_form();
        let t = form.select_file(png()).unwrap();
        form.finish_hosting(t, "https://first".to_string());

        form.select_file(png()).unwrap();
        assert!(form.pending_url().is_none());
    }

    #[test]
    fn tickets_from_a_discarded_form_do_not_match_a_new_one() {
        let mut old = filled_form();
        let old_ticket = old.select_file(png()).unwrap();
        drop(old);

        let mut form = filled_form();
        let ticket = form.select_file(png()).unwrap();
        assert_ne!(old_ticket, ticket);
        assert!(!form.finish_hosting(old_ticket, "https://old".to_string()));
        assert!(form.pending_url().is_none());
    }

    #[test]
    fn clearing_the_file_drops_hosting_in_flight() {
        let mut form = filled_form();
        let t = form.select_file(png()).unwrap();
        form.clear_file();

        assert!(form.file().is_none());
        assert!(!form.is_current(t));
        assert!(!form.finish_hosting(t, "https://late".to_string()));
        assert!(form.pending_url().is_none());
    }

    #[test]
    fn from_path_sniffs_mime_and_size() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("photo.JPG");
        std::fs::write(&path, b"not really a jpeg")?;

        let f = FileSelection::from_path(&path)?;
        assert_eq!(f.name, "photo.JPG");
        assert_eq!(f.mime, "image/jpeg");
        assert_eq!(f.size, 17);
        assert_eq!(f.bytes.len(), 17);

        assert_eq!(mime_for_path(std::path::Path::new("a.webp")), "image/webp");
        assert!(FileSelection::from_path(dir.path()).is_err());
        Ok(())
    }
