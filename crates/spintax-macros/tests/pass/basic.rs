fn main() {
    const GREETING: &str = spintax::template!("{Hello|Hi}, world");
    assert!(spintax::validate(GREETING));
}
