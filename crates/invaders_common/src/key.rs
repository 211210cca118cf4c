/// Logical keys understood by the games, independent of the windowing backend.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    A,
    D,
    P,
    Left,
    Right,
    Space,
    Escape,
    None,
}
