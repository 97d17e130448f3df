fn main() {
    const PLAIN: &str = spintax::template!("no groups at all");
    assert_eq!(spintax::resolve(PLAIN), PLAIN);
}
