fn main() {
    const OPTIONAL: &str = spintax::template!("see you{| soon}");
    let resolved = spintax::resolve(OPTIONAL);
    assert!(resolved == "see you" || resolved == "see you soon");
}
