use std::cell::RefCell;

use linecmd_core::{Command, DispatchSummary, Dispatcher};
use pretty_assertions::assert_eq;

type Handler<'h> = &'h dyn Fn(&[&str]);

/// Ordered log of `(who, args)` pairs; the fallback logs as `"f"`.
#[derive(Default)]
struct Log(RefCell<Vec<(String, Vec<String>)>>);

impl Log {
    fn push(&self, who: &str, args: &[&str]) {
        self.0
            .borrow_mut()
            .push((who.into(), args.iter().map(|a| a.to_string()).collect()));
    }

    fn take(&self) -> Vec<(String, Vec<String>)> {
        self.0.take()
    }
}

fn entry(who: &str, args: &[&str]) -> (String, Vec<String>) {
    (who.into(), args.iter().map(|a| a.to_string()).collect())
}

fn line(text: &str) -> Vec<u8> {
    let mut buf = text.as_bytes().to_vec();
    buf.push(0);
    buf
}

/// Runs `input` against the `{status: h1, period: h2}` table with fallback `f`.
fn run<const MAX: usize>(input: &str, null_as_arg: bool) -> (usize, Vec<(String, Vec<String>)>) {
    let log = Log::default();
    let h1 = |args: &[&str]| log.push("h1", args);
    let h2 = |args: &[&str]| log.push("h2", args);
    let table: [Command<'_, Handler<'_>>; 2] =
        [Command::new("status", &h1 as Handler), Command::new("period", &h2 as Handler)];
    let fallback = |name: &str| log.push("f", &[name]);

    let mut dispatcher = Dispatcher::<MAX, _, _>::new(&table, fallback);
    let mut buf = line(input);
    let count = dispatcher.execute(&mut buf, null_as_arg).unwrap();
    (count, log.take())
}

#[test]
fn two_commands_one_line() {
    let (count, calls) = run::<4>("status,1;period,200", false);
    assert_eq!(count, 2);
    assert_eq!(calls, [entry("h1", &["1"]), entry("h2", &["200"])]);
}

#[test]
fn empty_segment_is_skipped() {
    let (count, calls) = run::<4>("status;;period,50", false);
    assert_eq!(count, 2);
    assert_eq!(calls, [entry("h1", &[]), entry("h2", &["50"])]);
}

#[test]
fn unknown_command_goes_to_fallback() {
    let (count, calls) = run::<4>("foo,1", false);
    assert_eq!(count, 0);
    assert_eq!(calls, [entry("f", &["foo"])]);
}

#[test]
fn empty_arguments_dropped_by_default() {
    let (count, calls) = run::<4>("status,1,,,2", false);
    assert_eq!(count, 1);
    assert_eq!(calls, [entry("h1", &["1", "2"])]);
}

#[test]
fn empty_arguments_kept_with_null_as_arg() {
    let (count, calls) = run::<4>("status,1,,,2", true);
    assert_eq!(count, 1);
    assert_eq!(calls, [entry("h1", &["1", "", "", "2"])]);
}

#[test]
fn empty_line_does_nothing() {
    let (count, calls) = run::<4>("", false);
    assert_eq!(count, 0);
    assert!(calls.is_empty());

    let (count, calls) = run::<4>(";;;", true);
    assert_eq!(count, 0);
    assert!(calls.is_empty());
}

#[test]
fn null_policy_differs_by_one_per_double_separator() {
    for input in ["status,a,,b", "period,,x", "status,x,"] {
        let (_, without) = run::<8>(input, false);
        let (_, with) = run::<8>(input, true);
        assert_eq!(with[0].1.len(), without[0].1.len() + 1, "input {input:?}");
    }
}

#[test]
fn argument_count_is_capped() {
    for max_present in 0..6 {
        let args: Vec<String> = (0..max_present).map(|i| i.to_string()).collect();
        let mut input = String::from("status");
        for arg in &args {
            input.push(',');
            input.push_str(arg);
        }

        let (count, calls) = run::<3>(&input, false);
        assert_eq!(count, 1);
        assert_eq!(calls[0].1.len(), max_present.min(3), "input {input:?}");
        assert_eq!(calls[0].1[..], args[..max_present.min(3)]);
    }
}

#[test]
fn count_matches_known_segments_only() {
    let (count, calls) = run::<4>(";status;x;period,1;y,2,3;status;", false);
    assert_eq!(count, 3);
    assert_eq!(
        calls,
        [
            entry("h1", &[]),
            entry("f", &["x"]),
            entry("h2", &["1"]),
            entry("f", &["y"]),
            entry("h1", &[]),
        ]
    );
}

#[test]
fn lookup_is_case_sensitive_and_exact() {
    let (count, calls) = run::<4>("Status;statu;statuss;status", false);
    assert_eq!(count, 1);
    assert_eq!(
        calls,
        [entry("f", &["Status"]), entry("f", &["statu"]), entry("f", &["statuss"]), entry("h1", &[])]
    );
}

#[test]
fn duplicate_names_resolve_to_first_entry() {
    let log = Log::default();
    let first = |args: &[&str]| log.push("first", args);
    let second = |args: &[&str]| log.push("second", args);
    let table: [Command<'_, Handler<'_>>; 2] = [Command::new("x", &first as Handler), Command::new("x", &second as Handler)];
    let mut dispatcher = Dispatcher::<2, _, _>::new(&table, |_: &str| {});

    assert_eq!(dispatcher.table().first_duplicate(), Some((0, 1)));
    assert_eq!(dispatcher.find("x"), Some(0));
    assert_eq!(dispatcher.execute_str("x;x,1", false), Ok(2));
    assert_eq!(log.take(), [entry("first", &[]), entry("first", &["1"])]);
}

#[test]
fn summary_reports_overflow() {
    let log = Log::default();
    let h = |args: &[&str]| log.push("test", args);
    let table: [Command<'_, Handler<'_>>; 1] = [Command::new("test", &h as Handler)];
    let mut dispatcher = Dispatcher::<2, _, _>::new(&table, |name: &str| log.push("f", &[name]));

    let mut buf = line("test,a,b,c;;nope;test,d");
    let summary = dispatcher.execute_summary(&mut buf, false).unwrap();
    assert_eq!(
        summary,
        DispatchSummary { invoked: 2, unmatched: 1, skipped: 1, truncated: 1, invalid: 0 }
    );
    assert_eq!(log.take(), [entry("test", &["a", "b"]), entry("f", &["nope"]), entry("test", &["d"])]);
}

#[test]
fn segment_without_name_is_skipped_silently() {
    for input in [",1;status", "status;,x,y"] {
        let log = Log::default();
        let h1 = |args: &[&str]| log.push("h1", args);
        let h2 = |args: &[&str]| log.push("h2", args);
        let table: [Command<'_, Handler<'_>>; 2] =
            [Command::new("status", &h1 as Handler), Command::new("period", &h2 as Handler)];
        let mut dispatcher = Dispatcher::<4, _, _>::new(&table, |name: &str| log.push("f", &[name]));

        let mut buf = line(input);
        let summary = dispatcher.execute_summary(&mut buf, false).unwrap();
        assert_eq!(
            summary,
            DispatchSummary { invoked: 1, unmatched: 0, skipped: 1, truncated: 0, invalid: 0 },
            "input {input:?}"
        );
        assert_eq!(log.take(), [entry("h1", &[])], "input {input:?}");
    }
}

#[test]
fn line_noise_only_costs_its_own_segment() {
    let log = Log::default();
    let h1 = |args: &[&str]| log.push("h1", args);
    let h2 = |args: &[&str]| log.push("h2", args);
    let table: [Command<'_, Handler<'_>>; 2] =
        [Command::new("status", &h1 as Handler), Command::new("period", &h2 as Handler)];
    let mut dispatcher = Dispatcher::<4, _, _>::new(&table, |name: &str| log.push("f", &[name]));

    let mut buf = *b"status,1;period,\xff200\0";
    let summary = dispatcher.execute_summary(&mut buf, false).unwrap();
    assert_eq!(
        summary,
        DispatchSummary { invoked: 1, unmatched: 0, skipped: 0, truncated: 0, invalid: 1 }
    );
    assert_eq!(log.take(), [entry("h1", &["1"])]);
}
