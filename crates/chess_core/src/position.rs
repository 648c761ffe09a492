#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];
}

/// One of the 64 squares of a chessboard.
///
/// Both halves come from closed enums, so every value is a real square and
/// construction cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCoordinate {
    file: File,
    rank: Rank,
}

impl BoardCoordinate {
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    pub const fn file(&self) -> File {
        self.file
    }

    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Every square, rank by rank: a1, b1, .., h1, a2, .., h8.
    pub fn all() -> impl Iterator<Item = BoardCoordinate> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Self::new(file, rank)))
    }
}

impl From<(File, Rank)> for BoardCoordinate {
    fn from((file, rank): (File, Rank)) -> Self {
        Self::new(file, rank)
    }
}

impl From<BoardCoordinate> for (File, Rank) {
    fn from(coord: BoardCoordinate) -> Self {
        (coord.file, coord.rank)
    }
}
