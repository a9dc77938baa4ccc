use super::{stringify_from_contexts, stringify_from_tokens};
use crate::{
    context::{ElementContext, Parameters, ParseOptions, parse_all},
    error::ErrorKind,
    split::{Group, Token, split_with_parameter},
};

fn split(input: &str) -> Vec<Group> {
    split_with_parameter(input).collect::<Result<_, _>>().unwrap()
}

#[test]
fn test_from_tokens() {
    macro_rules! test {
        ($input:expr => $output:expr) => {
            assert_eq!(stringify_from_tokens(&split($input)).unwrap(), $output, "input: {:?}", $input);
        };
    }

    test!(" gzip , deflate , br , zstd " => "gzip, deflate, br, zstd");
    test!(" br ; q = 1.0 , * ; q = 0.1 " => "br; q=1.0, *; q=0.1");
    test!("max-age=16070400;includeSubDomains" => "max-age=16070400; includeSubDomains");
    test!(r#"attachment; filename="fname.ext""# => "attachment; filename=fname.ext");
    test!(r#"CP="not a policy, see elsewhere""# => r#"CP="not a policy, see elsewhere""#);
    test!(r#"a="say \"hi\"""# => r#"a="say \"hi\"""#);
    test!(r#"<https://example.com/feed>; rel="alternate""# => "<https://example.com/feed>; rel=alternate");
    // quoting does not look into brackets
    test!(r#"<https://api.example.com/issues?page=2>; rel="prev""# => r#""<https://api.example.com/issues?page=2>"; rel=prev"#);
    test!("fullscreen=(), camera=()" => "fullscreen=(), camera=()");
    test!("1.0 fred" => "1.0 fred");
    test!("€=苗条" => "€=苗条");

    let groups: Vec<Group> = vec![
        vec![Token::from(("a", "")), Token::from(" b ")],
        vec![Token::from(("k=", "v;"))],
    ];
    assert_eq!(stringify_from_tokens(&groups).unwrap(), r#"a=""; " b ", "k="="v;""#);
    assert_eq!(stringify_from_tokens(&[]).unwrap(), "");

    // non-ASCII pair values are not extended-encoded
    let groups: Vec<Group> = vec![vec![Token::from("attachment"), Token::from(("filename", "€ rates"))]];
    assert_eq!(stringify_from_tokens(&groups).unwrap(), "attachment; filename=€ rates");
}

#[test]
fn test_round_trip() {
    for input in [
        "text/html, application/xhtml+xml, application/xml;q=0.9, image/webp, */*;q=0.8",
        r#" http/1.1 = "http2.example.com:8001" ; ma = 7200 "#,
        r#"max-age=604800, enforce, report-uri="https://example.example/report""#,
        r#"</style.css>; rel=preload; as=style; fetchpriority="high""#,
        r#"{ "group": "csp-endpoint", "max_age": 10886400, "endpoints": [ { "url": "https-url-of-site-which-collects-reports" } ] }"#,
        r#"CP="This is not a P3P policy! See https://en.wikipedia.org/wiki/Special:CentralAutoLogin/P3P for more info.""#,
        r#"a="x, y"; b="p=q"; c=" padded "; d="""#,
        r#"<https://example.com/苗条>; rel="preconnect""#,
    ] {
        let groups = split(input);
        let output = stringify_from_tokens(&groups).unwrap();
        assert_eq!(split(&output), groups, "input: {input:?}, output: {output:?}");
    }
}

#[test]
fn test_from_tokens_error() {
    macro_rules! test {
        ($groups:expr => $kind:expr) => {
            let groups: Vec<Group> = $groups;
            let err = stringify_from_tokens(&groups).unwrap_err();
            assert_eq!(err.kind(), &$kind);
            assert!(err.is_empty_structure());
        };
    }

    test!(vec![vec![Token::from("a")], vec![]] => ErrorKind::EmptyGroup(1));
    test!(vec![vec![Token::from("a"), Token::from("")]] => ErrorKind::EmptyToken(0, 1));
    test!(vec![vec![Token::from("a")], vec![Token::from(("", "v"))]] => ErrorKind::EmptyKey(1, 0));
}

#[test]
fn test_from_contexts() {
    let contexts = parse_all(
        "text/html; charset=utf-8, max-age=60; includeSubDomains",
        ParseOptions::new(),
    )
    .unwrap();
    assert_eq!(
        stringify_from_contexts(&contexts).unwrap(),
        "text/html; charset=utf-8, max-age=60; includesubdomains",
    );

    let contexts = [
        ElementContext::new("attachment")
            .with_parameter("filename", "€ rates.txt")
            .with_parameter("size", "1024"),
        ElementContext::from_parameters([("title", "a; b")]),
    ];
    let output = stringify_from_contexts(&contexts).unwrap();
    assert_eq!(
        output,
        r#"attachment; filename*=UTF-8''%E2%82%AC%20rates.txt; size=1024, title="a; b""#,
    );

    // extended values are decoded back
    assert_eq!(parse_all(&output, ParseOptions::new()).unwrap(), contexts);
}

#[test]
fn test_from_contexts_error() {
    let empty = ElementContext::default();
    let err = stringify_from_contexts(&[ElementContext::new("a"), empty]).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EmptyContext(1));
    assert!(err.is_empty_structure());

    let err = stringify_from_contexts(&[ElementContext::new("")]).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EmptyValue(0));

    let context = ElementContext {
        value: None,
        parameters: Parameters::from([("a", "1"), ("", "2")]),
    };
    let err = stringify_from_contexts(&[context]).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EmptyKey(0, 1));
}
