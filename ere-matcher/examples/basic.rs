use ere_matcher::{Input, Regex};

fn main() {
    let re = Regex::new("l[a-z]*").unwrap();
    let hay = "Hark! Hark! The lark";
    let m = re.search(hay).unwrap();
    println!(
        "{:?} at {}..{}",
        String::from_utf8_lossy(m.substr(hay.as_bytes(), 0).unwrap()),
        m.start(),
        m.end(),
    );

    // Leftmost-longest: a leftmost-first engine would settle for "a" here.
    let re = Regex::new("a|ab").unwrap();
    assert_eq!(re.search("ab").unwrap().len(), 2);

    // Anchored matching at a chosen offset.
    let re = Regex::new("ark").unwrap();
    assert!(re.match_at("Hark").is_none());
    assert!(re.match_at(Input::builder(b"Hark").start(1).build()).is_some());

    // Iterate, then rewrite in place.
    let re = Regex::new("[0-9]+").unwrap();
    for m in re.find_iter(b"cell 12, row 7") {
        println!("digits at {}..{}", m.start(), m.end());
    }
    let mut hay = b"cell 12, row 7".to_vec();
    re.replace().replacement(b"#").count(0).call(&mut hay);
    assert_eq!(hay, b"cell #, row #");
}
