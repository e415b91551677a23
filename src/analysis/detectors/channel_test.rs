// src/analysis/detectors/channel_test.rs

use crate::analysis::scan_source;
use crate::types::{Buffer, Detail, Finding, Idiom, Operand};
use std::path::Path;

fn scan(code: &str) -> Vec<Finding> {
    scan_source(Path::new("chan.go"), code).unwrap()
}

fn only(findings: &[Finding], idiom: Idiom) -> Vec<Finding> {
    findings.iter().filter(|f| f.idiom == idiom).cloned().collect()
}

fn buffer_of(f: &Finding) -> (String, Buffer) {
    match &f.detail {
        Detail::Channel { element_type, buffer } => (element_type.clone(), buffer.clone()),
        other => panic!("unexpected detail {other:?}"),
    }
}

const MAKES: &str = "package p

func f(n int) {
\ta := make(chan int)
\tb := make(chan int, 5)
\tc := make(chan int, n)
\td := make(chan string, 2.0)
\te := make(chan int, n*2)
\tm := make(map[string]int, 5)
\tp := make(chan *T)
\tq := make([]int, 3)
}
";

#[test]
fn test_unbuffered_channel() {
    let makes = only(&scan(MAKES), Idiom::ChannelMake);
    let first = &makes[0];
    assert_eq!(buffer_of(first), ("int".to_string(), Buffer::Unbuffered));
    assert_eq!(first.position.line, 4);
    assert_eq!(first.position.column, 7);
}

#[test]
fn test_buffer_kinds() {
    let makes = only(&scan(MAKES), Idiom::ChannelMake);
    let buffers: Vec<(String, Buffer)> = makes.iter().map(buffer_of).collect();
    assert_eq!(
        buffers,
        vec![
            ("int".to_string(), Buffer::Unbuffered),
            ("int".to_string(), Buffer::Literal("5".into())),
            ("int".to_string(), Buffer::Computed("n".into())),
            ("string".to_string(), Buffer::NonInteger("2.0".into())),
            ("int".to_string(), Buffer::Computed("n*2".into())),
        ]
    );
}

#[test]
fn test_make_of_non_channel_ignored() {
    let code = "package p\n\nfunc f() {\n\tm := make(map[string]int)\n\ts := make([]byte, 0, 8)\n}\n";
    assert!(only(&scan(code), Idiom::ChannelMake).is_empty());
}

#[test]
fn test_literal_text_kept_verbatim() {
    let code = "package p\n\nfunc f() {\n\tc := make(chan byte, 0x10)\n}\n";
    let makes = only(&scan(code), Idiom::ChannelMake);
    assert_eq!(buffer_of(&makes[0]).1, Buffer::Literal("0x10".into()));
}

const SENDS: &str = "package p

func g(ch chan int, s *S) {
\tch <- 1 + 2
\ts.out <- 3
\tv := <-ch
\tw := <-s.out
\t<-ch
\tselect {
\tcase x := <-ch:
\t\t_ = x
\t}
}
";

#[test]
fn test_send_to_identifier() {
    let sends = only(&scan(SENDS), Idiom::ChannelSend);
    assert_eq!(sends.len(), 1, "send to s.out must not be reported");
    assert_eq!(
        sends[0].detail,
        Detail::Send { channel: "ch".into(), value: "1 + 2".into() }
    );
    assert_eq!(sends[0].position.line, 4);
}

#[test]
fn test_receives() {
    let receives = only(&scan(SENDS), Idiom::ChannelReceive);
    let operands: Vec<Operand> = receives
        .iter()
        .map(|f| match &f.detail {
            Detail::Receive { channel } => channel.clone(),
            other => panic!("unexpected detail {other:?}"),
        })
        .collect();
    assert_eq!(
        operands,
        vec![
            Operand::Ident("ch".into()),
            Operand::Expr("s.out".into()),
            Operand::Ident("ch".into()),
            Operand::Ident("ch".into()),
        ]
    );
}

#[test]
fn test_other_unary_operators_ignored() {
    let code = "package p\n\nfunc f(x int) {\n\ty := -x\n\tz := &x\n\t_ = !true\n}\n";
    assert!(only(&scan(code), Idiom::ChannelReceive).is_empty());
}

#[test]
fn test_allocation_nested_in_send_target() {
    let code = "package p\n\nfunc f() {\n\tpick(make(chan int, 1)) <- 5\n}\n";
    let findings = scan(code);
    assert!(only(&findings, Idiom::ChannelSend).is_empty());
    let makes = only(&findings, Idiom::ChannelMake);
    assert_eq!(makes.len(), 1);
    assert_eq!(buffer_of(&makes[0]).1, Buffer::Literal("1".into()));
}

#[test]
fn test_allocation_nested_in_send_value() {
    let code = "package p\n\nfunc f(chans chan chan int) {\n\tchans <- make(chan int)\n}\n";
    let findings = scan(code);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].idiom, Idiom::ChannelSend);
    assert_eq!(findings[1].idiom, Idiom::ChannelMake);
}
