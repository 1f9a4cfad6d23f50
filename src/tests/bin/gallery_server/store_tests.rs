    use super::*;

    fn records(n: usize) -> Vec<ImageRecord> {
        (0..n)
            .map(|i| ImageRecord {
                id: ImageId(format!("id{}", i)),
                title: format!("t{}", i),
                description: "d".to_string(),
                url: format!("https://x/{}.png", i),
                ts: i as i64,
            })
            .collect()
    }

    fn ids(page: &Page) -> Vec<&str> {
        page.items.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn walks_pages_without_overlap() -> Result<()> {
        let all = records(5);

        let p1 = page_after(&all, None, 2)?;
        assert_eq!(ids(&p1), vec!["id0", "id1"]);
        assert_eq!(p1.cursor.as_deref(), Some("id1"));

        let p2 = page_after(&all, p1.cursor.as_deref(), 2)?;
        assert_eq!(ids(&p2), vec!["id2", "id3"]);

        let p3 = page_after(&all, p2.cursor.as_deref(), 2)?;
        assert_eq!(ids(&p3), vec!["id4"]);
        assert_eq!(p3.cursor, None);
        Ok(())
    }

    #[test]
    fn exact_multiple_ends_with_null_cursor() -> Result<()> {
        let all = records(4);
        let p2 = page_after(&all, Some("id1"), 2)?;
        assert_eq!(ids(&p2), vec!["id2", "id3"]);
        assert_eq!(p2.cursor, None);
        Ok(())
    }

    #[test]
    fn empty_store_and_unknown_cursor() {
        let page = page_after(&[], None, 3).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.cursor, None);

        assert!(page_after(&records(2), Some("nope"), 3).is_err());
    }

    #[test]
    fn new_image_needs_all_fields() {
        let ok = NewImage {
            title: "t".to_string(),
            description: "d".to_string(),
            url: "u".to_string(),
        };
        assert!(check_new_image(&ok).is_ok());

        let mut no_url = ok.clone();
        no_url.url = " ".to_string();
        assert!(check_new_image(&no_url).is_err());
    }

    #[test]
    fn generated_ids_are_hex_and_distinct() -> Result<()> {
        let a = generate_image_id()?;
        let b = generate_image_id()?;
        assert_eq!(a.as_str().len(), 24);
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
        Ok(())
    }
