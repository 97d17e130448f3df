fn main() {
    const OFFER: &str = spintax::template!("{Act now|{Call|Text} today}!");
    let resolved = spintax::resolve(OFFER);
    assert!(!resolved.contains('{'));
}
