//! Registry of every pair, triple and run in the suit
//!
//! Built once on first use and read-only afterwards, so workers share it by
//! plain reference. Search code only ever holds `&'static Group`.

use crate::io::configuration::{TILE_KINDS, TILE_MAX, TILE_MIN};
use crate::tiles::hand::tile_index;
use crate::tiles::mask::TileMask;
use std::fmt;
use std::sync::LazyLock;

/// Pads short member lists when computing group codes
const CODE_PAD: u16 = 10;
/// Radix of one member digit in a group code
const CODE_RADIX: u16 = CODE_PAD + 1;
/// Added to the code of an open group so it never collides with a closed one
pub const OPEN_MARKER: u16 = CODE_RADIX * CODE_RADIX * CODE_RADIX + 1;
/// Number of bits a single group code occupies
pub const CODE_BITS: u32 = 12;

const _: () = assert!(2 * OPEN_MARKER < (1 << CODE_BITS));

/// Shape of a group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKind {
    /// Two identical tiles
    Pair,
    /// Three identical tiles
    Triple,
    /// Three consecutive tiles
    Run,
}

impl GroupKind {
    /// Number of tiles in a group of this kind
    pub const fn size(self) -> usize {
        match self {
            Self::Pair => 2,
            Self::Triple | Self::Run => 3,
        }
    }
}

/// Rendering of a group that holds the completing tile
#[derive(Debug)]
struct OpenForm {
    text: String,
    code: u16,
}

/// A pair, triple or run with its precomputed text and codes
#[derive(Debug)]
pub struct Group {
    id: usize,
    kind: GroupKind,
    members: Vec<u8>,
    mask: TileMask,
    closed_text: String,
    closed_code: u16,
    /// Open rendering per completing tile, index 0 holding value 1
    open_forms: [Option<OpenForm>; TILE_KINDS],
}

impl Group {
    fn new(id: usize, kind: GroupKind, members: Vec<u8>) -> Self {
        let mut open_forms: [Option<OpenForm>; TILE_KINDS] = Default::default();
        for (index, slot) in open_forms.iter_mut().enumerate() {
            let completion = index as u8 + TILE_MIN;
            let Some(position) = members.iter().position(|&tile| tile == completion) else {
                continue;
            };
            let mut rest = members.clone();
            rest.remove(position);
            *slot = Some(OpenForm {
                text: bracketed('[', &rest, ']'),
                code: OPEN_MARKER + digit_code(&rest),
            });
        }

        Self {
            id,
            kind,
            mask: TileMask::from_tiles(members.iter().copied()),
            closed_text: bracketed('(', &members, ')'),
            closed_code: digit_code(&members),
            members,
            open_forms,
        }
    }

    /// Position of this group in the catalog
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Pair, triple or run
    pub const fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Member tiles in ascending order
    pub fn members(&self) -> &[u8] {
        &self.members
    }

    /// Smallest member tile
    pub fn base(&self) -> u8 {
        self.members.first().copied().unwrap_or(TILE_MIN)
    }

    /// Test whether `tile` is one of the members
    pub fn contains(&self, tile: u8) -> bool {
        self.mask.contains(tile)
    }

    /// Closed form, such as `(123)` or `(99)`
    pub fn closed(&self) -> &str {
        &self.closed_text
    }

    /// Open form when `completion` is the tile that finished this group
    ///
    /// Shows the remaining members, such as `[23]` for `(123)` completed by 1.
    /// Returns `None` if `completion` is not a member.
    pub fn open(&self, completion: u8) -> Option<&str> {
        self.open_form(completion).map(|form| form.text.as_str())
    }

    /// Either form, open when `completion` is given
    pub fn render(&self, completion: Option<u8>) -> Option<&str> {
        match completion {
            Some(tile) => self.open(tile),
            None => Some(self.closed()),
        }
    }

    /// Numeric identity of the closed form
    ///
    /// Members padded to three digits with 10 read as base-11, last digit
    /// most significant. Closed runs and triples sort below closed pairs.
    pub const fn code(&self) -> u16 {
        self.closed_code
    }

    /// Numeric identity of the open form completed by `completion`
    ///
    /// Always above every closed code.
    pub fn open_code(&self, completion: u8) -> Option<u16> {
        self.open_form(completion).map(|form| form.code)
    }

    fn open_form(&self, completion: u8) -> Option<&OpenForm> {
        tile_index(completion)
            .and_then(|index| self.open_forms.get(index))
            .and_then(Option::as_ref)
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Group {}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.closed_text)
    }
}

fn bracketed(open: char, tiles: &[u8], close: char) -> String {
    let mut text = String::with_capacity(tiles.len() + 2);
    text.push(open);
    for &tile in tiles {
        text.push(char::from(b'0' + tile));
    }
    text.push(close);
    text
}

fn digit_code(tiles: &[u8]) -> u16 {
    let mut digits = [CODE_PAD; 3];
    for (digit, &tile) in digits.iter_mut().zip(tiles) {
        *digit = u16::from(tile);
    }
    digits
        .iter()
        .rev()
        .fold(0, |code, &digit| code * CODE_RADIX + digit)
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// Every group of the suit: 9 pairs, 9 triples and 7 runs
#[derive(Debug)]
pub struct Catalog {
    groups: Vec<Group>,
    pair_ids: [usize; TILE_KINDS],
    triple_ids: [usize; TILE_KINDS],
    run_ids: [Option<usize>; TILE_KINDS],
}

impl Catalog {
    /// Shared catalog for the whole process
    pub fn global() -> &'static Self {
        &CATALOG
    }

    fn build() -> Self {
        let mut groups = Vec::new();
        let mut pair_ids = [0; TILE_KINDS];
        let mut triple_ids = [0; TILE_KINDS];
        let mut run_ids = [None; TILE_KINDS];

        for (slot, tile) in pair_ids.iter_mut().zip(TILE_MIN..=TILE_MAX) {
            *slot = groups.len();
            groups.push(Group::new(groups.len(), GroupKind::Pair, vec![tile; 2]));
        }
        for (slot, tile) in triple_ids.iter_mut().zip(TILE_MIN..=TILE_MAX) {
            *slot = groups.len();
            groups.push(Group::new(groups.len(), GroupKind::Triple, vec![tile; 3]));
        }
        for (slot, tile) in run_ids.iter_mut().zip(TILE_MIN..=TILE_MAX - 2) {
            *slot = Some(groups.len());
            groups.push(Group::new(
                groups.len(),
                GroupKind::Run,
                vec![tile, tile + 1, tile + 2],
            ));
        }

        Self {
            groups,
            pair_ids,
            triple_ids,
            run_ids,
        }
    }

    /// Every group, pairs first, then triples, then runs
    pub fn iter(&'static self) -> impl Iterator<Item = &'static Group> {
        self.groups.iter()
    }

    /// Group with the given catalog position
    pub fn get(&'static self, id: usize) -> Option<&'static Group> {
        self.groups.get(id)
    }

    /// Pair of `tile`
    pub fn pair(&'static self, tile: u8) -> Option<&'static Group> {
        self.lookup(&self.pair_ids, tile)
    }

    /// Triple of `tile`
    pub fn triple(&'static self, tile: u8) -> Option<&'static Group> {
        self.lookup(&self.triple_ids, tile)
    }

    /// Run starting at `start`
    pub fn run(&'static self, start: u8) -> Option<&'static Group> {
        tile_index(start)
            .and_then(|index| self.run_ids.get(index))
            .copied()
            .flatten()
            .and_then(|id| self.groups.get(id))
    }

    /// Every triple and run
    pub fn sets(&'static self) -> impl Iterator<Item = &'static Group> {
        self.iter().filter(|group| group.kind() != GroupKind::Pair)
    }

    /// Every pair, triple and run that includes `tile`
    pub fn groups_containing(&'static self, tile: u8) -> impl Iterator<Item = &'static Group> {
        self.iter().filter(move |group| group.contains(tile))
    }

    fn lookup(&'static self, ids: &[usize; TILE_KINDS], tile: u8) -> Option<&'static Group> {
        tile_index(tile)
            .and_then(|index| ids.get(index))
            .and_then(|&id| self.groups.get(id))
    }
}
