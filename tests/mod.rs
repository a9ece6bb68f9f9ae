pub mod line {
    use caldata_lite::LineReader;
    use itertools::Itertools;

    #[test]
    fn unfold_events() {
        let input = include_str!("./resources/ical_events.ics");
        let lines = LineReader::new(input).join("\n");
        insta::assert_snapshot!(lines, @r"
BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//caldata-lite//tests//EN
CALSCALE:GREGORIAN
BEGIN:VEVENT
UID:first@example.com
DTSTAMP:20240301T120000Z
DTSTART;VALUE=DATE:20240315
DTEND;VALUE=DATE:20240316
SUMMARY:Spring equinox party
DESCRIPTION:Bring snacks\, drinks\; and good mood.\nDoors open at 6.
LOCATION:Garden
END:VEVENT
BEGIN:VEVENT
UID:second@example.com
DTSTAMP:20240301T120000Z
DTSTART:20240320T173000Z
DTEND:20240320T190000Z
SUMMARY:A rather long summary that has been folded over more than one physical line by the producer
DESCRIPTION:Agenda: review\, plan
END:VEVENT
END:VCALENDAR
");
    }

    #[test]
    fn bare_and_crlf_line_breaks_agree() {
        let crlf = include_str!("./resources/ical_events.ics");
        let lf = crlf.replace("\r\n", "\n");
        assert!(LineReader::new(crlf).eq(LineReader::new(&lf)));
    }
}

pub mod property {
    use caldata_lite::ContentLineParser;

    #[test]
    fn every_fixture_line_tokenizes() {
        for input in [
            include_str!("./resources/minimal.ics"),
            include_str!("./resources/ical_events.ics"),
            include_str!("./resources/ical_todos.ics"),
        ] {
            for res in ContentLineParser::from_str(input) {
                let line = res.unwrap();
                assert!(!line.name.is_empty());
            }
        }
    }

    #[test]
    fn colons_stay_in_value() {
        let line = ContentLineParser::from_str("DESCRIPTION:Agenda: review\\, plan")
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(line.name, "DESCRIPTION");
        assert_eq!(line.parameter, "");
        assert_eq!(line.value, "Agenda: review\\, plan");
    }
}

pub mod parser {
    use caldata_lite::{ItemError, ParserOptions, parse, parse_with_options};
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test_log::test]
    fn minimal_document() {
        let cal = parse(include_str!("./resources/minimal.ics"));
        assert_eq!(cal.type_name(), "VCALENDAR");
        let events: Vec<_> = cal.events().collect();
        assert_eq!(events.len(), 1);

        let event = events[0];
        assert_eq!(event.summary().unwrap(), "Test");
        assert_eq!(event.start_date(), date(2024, 1, 1));
        assert_eq!(event.end_date(), date(2024, 1, 2));
        assert!(event.is_all_day());
        assert!(event.get_date_time("DTEND").unwrap().unwrap().is_all_day());
    }

    #[test_log::test]
    fn events_fixture() {
        let cal = parse(include_str!("./resources/ical_events.ics"));
        assert_eq!(cal.get_text("PRODID").unwrap(), "-//caldata-lite//tests//EN");
        assert_eq!(cal.get_text("VERSION").unwrap(), "2.0");

        let uids: Vec<String> = cal.events().map(|e| e.uid().unwrap()).collect();
        assert_eq!(uids, ["first@example.com", "second@example.com"]);

        let mut events = cal.events();
        let first = events.next().unwrap();
        assert_eq!(
            first.description().unwrap(),
            "Bring snacks, drinks; and good mood.\nDoors open at 6."
        );
        assert_eq!(first.start_date(), date(2024, 3, 15));
        assert_eq!(first.end_date(), date(2024, 3, 16));
        assert!(first.is_all_day());
        assert_eq!(
            first.get_property("DTSTART").unwrap().param("VALUE"),
            Some("DATE")
        );

        let second = events.next().unwrap();
        assert_eq!(
            second.summary().unwrap(),
            "A rather long summary that has been folded over more than one physical line by the producer"
        );
        assert_eq!(second.description().unwrap(), "Agenda: review, plan");
        assert!(!second.is_all_day());
        let start = second.get_date_time("DTSTART").unwrap().unwrap();
        assert_eq!(start.time(), NaiveTime::from_hms_opt(17, 30, 0));
        assert_eq!(start.timezone(), "");
        assert_eq!(
            second.location(),
            Err(ItemError::MissingProperty("LOCATION".to_owned()))
        );

        assert!(events.next().is_none());
    }

    #[test]
    fn event_sequence_restarts() {
        let cal = parse(include_str!("./resources/ical_events.ics"));
        let once: Vec<String> = cal.events().map(|e| e.summary().unwrap()).collect();
        let twice: Vec<String> = cal.events().map(|e| e.summary().unwrap()).collect();
        assert_eq!(once.len(), 2);
        similar_asserts::assert_eq!(once, twice);
    }

    #[test]
    fn idempotent() {
        for input in [
            include_str!("./resources/minimal.ics"),
            include_str!("./resources/ical_events.ics"),
            include_str!("./resources/ical_todos.ics"),
        ] {
            similar_asserts::assert_eq!(parse(input), parse(input));
        }
    }

    #[test_log::test]
    fn todos_fixture() {
        let cal = parse(include_str!("./resources/ical_todos.ics"));
        assert_eq!(cal.events().count(), 0);
        let todos: Vec<_> = cal.todos().collect();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].summary().unwrap(), "Water the plants");
        assert_eq!(todos[0].due_date(), date(2024, 4, 10));
        assert_eq!(todos[1].start_date(), date(2024, 4, 1));
        assert_eq!(todos[1].due_date(), date(2024, 5, 1));
        assert_eq!(cal.type_names().collect::<Vec<_>>(), ["VTODO"]);
    }

    #[test_log::test]
    fn byte_order_mark() {
        let cal = parse(include_str!("./resources/ical_bom.ics"));
        assert_eq!(cal.type_name(), "VCALENDAR");
        assert_eq!(cal.get_text("VERSION").unwrap(), "2.0");
        let events: Vec<_> = cal.events().collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].uid().unwrap(), "bom@example.com");
        assert_eq!(events[0].start_date(), date(2024, 7, 1));
        assert!(caldata_lite::parse_strict(include_str!("./resources/ical_bom.ics")).is_ok());
    }

    #[test_log::test]
    fn strict_time_reaches_views() {
        let input = "BEGIN:VCALENDAR\r\n\
            BEGIN:VEVENT\r\n\
            DTSTART:20240615T999Z\r\n\
            END:VEVENT\r\n\
            BEGIN:VTODO\r\n\
            DUE:20240615T999Z\r\n\
            END:VTODO\r\n\
            END:VCALENDAR\r\n";
        let lenient = parse(input);
        assert_eq!(lenient.events().next().unwrap().start_date(), date(2024, 6, 15));
        assert_eq!(lenient.todos().next().unwrap().due_date(), date(2024, 6, 15));

        let options = ParserOptions {
            strict_time: true,
            ..Default::default()
        };
        let strict = parse_with_options(input, &options);
        assert_eq!(strict.options(), &options);
        let event = strict.events().next().unwrap();
        assert_eq!(event.start_date(), None);
        assert!(!event.is_all_day());
        assert_eq!(strict.todos().next().unwrap().due_date(), None);
    }

    #[test]
    fn nested_mode_matches_flat_mode_for_flat_documents() {
        let input = include_str!("./resources/ical_events.ics");
        let nested = parse_with_options(
            input,
            &ParserOptions {
                nested: true,
                ..Default::default()
            },
        );
        let flat = parse(input);
        let summaries = |cal: &caldata_lite::CalendarRoot| -> Vec<String> {
            cal.events().map(|e| e.summary().unwrap()).collect()
        };
        similar_asserts::assert_eq!(summaries(&nested), summaries(&flat));
        // Only the flat reading keeps END lines around
        assert_eq!(flat.events().next().unwrap().get_text("END").unwrap(), "VEVENT");
        assert!(nested.events().next().unwrap().get_text("END").is_err());
    }
}
