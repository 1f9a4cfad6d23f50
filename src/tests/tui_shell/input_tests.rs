    use super::*;

    #[test]
    fn edits_at_cursor_with_multibyte_chars() {
        let mut input = Input::default();
        for c in "pôr".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.cursor, 3);

        input.move_left();
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.buf, "pxôr");

        input.delete();
        assert_eq!(input.buf, "pxr");

        input.backspace();
        assert_eq!(input.buf, "pr");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut input = Input::default();
        input.set("ab".to_string());
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.delete();
        assert_eq!(input.buf, "ab");

        input.clear();
        input.backspace();
        input.move_left();
        assert_eq!(input.cursor, 0);
        assert!(input.buf.is_empty());
    }
