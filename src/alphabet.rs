// src/alphabet.rs
// The fixed practice alphabet: letters, digits and the slash

use std::fmt;

/// One symbol of the practice alphabet.
///
/// Every symbol has two recordings in the clip library: the character sound
/// itself and a spoken voice cue. The set is closed and never changes at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    N0,
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
    N8,
    N9,
    Slash,
}

impl Symbol {
    /// Every symbol, in practice order: letters, digits, slash.
    pub const ALL: [Symbol; 37] = [
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
        Symbol::E,
        Symbol::F,
        Symbol::G,
        Symbol::H,
        Symbol::I,
        Symbol::J,
        Symbol::K,
        Symbol::L,
        Symbol::M,
        Symbol::N,
        Symbol::O,
        Symbol::P,
        Symbol::Q,
        Symbol::R,
        Symbol::S,
        Symbol::T,
        Symbol::U,
        Symbol::V,
        Symbol::W,
        Symbol::X,
        Symbol::Y,
        Symbol::Z,
        Symbol::N0,
        Symbol::N1,
        Symbol::N2,
        Symbol::N3,
        Symbol::N4,
        Symbol::N5,
        Symbol::N6,
        Symbol::N7,
        Symbol::N8,
        Symbol::N9,
        Symbol::Slash,
    ];

    /// File stem of the symbol's recordings (`<stem>.wav` and `v_<stem>.wav`).
    pub fn file_stem(self) -> &'static str {
        match self {
            Symbol::A => "a",
            Symbol::B => "b",
            Symbol::C => "c",
            Symbol::D => "d",
            Symbol::E => "e",
            Symbol::F => "f",
            Symbol::G => "g",
            Symbol::H => "h",
            Symbol::I => "i",
            Symbol::J => "j",
            Symbol::K => "k",
            Symbol::L => "l",
            Symbol::M => "m",
            Symbol::N => "n",
            Symbol::O => "o",
            Symbol::P => "p",
            Symbol::Q => "q",
            Symbol::R => "r",
            Symbol::S => "s",
            Symbol::T => "t",
            Symbol::U => "u",
            Symbol::V => "v",
            Symbol::W => "w",
            Symbol::X => "x",
            Symbol::Y => "y",
            Symbol::Z => "z",
            Symbol::N0 => "0",
            Symbol::N1 => "1",
            Symbol::N2 => "2",
            Symbol::N3 => "3",
            Symbol::N4 => "4",
            Symbol::N5 => "5",
            Symbol::N6 => "6",
            Symbol::N7 => "7",
            Symbol::N8 => "8",
            Symbol::N9 => "9",
            Symbol::Slash => "slash",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}
