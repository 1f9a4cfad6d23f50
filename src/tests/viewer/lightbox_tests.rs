    use super::*;

    #[test]
    fn close_keeps_url_and_reopen_shows_prior_image() {
        let mut lb = Lightbox::new();
        lb.open("https://x/1.png");
        assert!(lb.is_open());
        assert_eq!(lb.current_url(), "https://x/1.png");

        lb.close();
        assert!(!lb.is_open());
        assert_eq!(lb.current_url(), "https://x/1.png");

        assert!(lb.reopen());
        assert!(lb.is_open());
        assert_eq!(lb.current_url(), "https://x/1.png");
    }

    #[test]
    fn open_replaces_url() {
        let mut lb = Lightbox::new();
        lb.open("https://x/1.png");
        lb.open("https://x/2.png");
        assert_eq!(lb.current_url(), "https://x/2.png");
    }

    #[test]
    fn reopen_without_history_stays_closed() {
        let mut lb = Lightbox::new();
        assert!(!lb.reopen());
        assert!(!lb.is_open());
        assert_eq!(lb.current_url(), "");
    }
