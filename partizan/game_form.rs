//! Game forms of short partizan games and their normal play outcomes
//!
//! A form is given by the ordered lists of positions each player can move
//! to, written `{a, b, ...|c, d, ...}`. Forms are built bottom-up from
//! already constructed sub-forms, so every form is finite and acyclic and
//! all recursion over forms terminates.

use crate::{
    display,
    parsing::{Parser, impl_from_str_via_parser, lexeme, try_option},
    player::Player,
    total::impl_total_wrapper,
    transposition_table::TranspositionTable,
};
use auto_ops::impl_op_ex;
use std::{
    cmp::Ordering,
    fmt::{self, Display},
    iter::Sum,
};

/// Outcome class of a game under the normal play convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Left wins no matter who moves first
    L,

    /// The first player to move wins
    N,

    /// The second player wins
    P,

    /// Right wins no matter who moves first
    R,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::L => write!(f, "L"),
            Outcome::N => write!(f, "N"),
            Outcome::P => write!(f, "P"),
            Outcome::R => write!(f, "R"),
        }
    }
}

impl PartialOrd for Outcome {
    /// Standard order on outcomes: better for Left is greater, `N` and `P`
    /// are incomparable
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Outcome::L, Outcome::L) => Some(Ordering::Equal),
            (Outcome::L, Outcome::N) => Some(Ordering::Greater),
            (Outcome::L, Outcome::P) => Some(Ordering::Greater),
            (Outcome::L, Outcome::R) => Some(Ordering::Greater),
            (Outcome::N, Outcome::L) => Some(Ordering::Less),
            (Outcome::N, Outcome::N) => Some(Ordering::Equal),
            (Outcome::N, Outcome::P) => None,
            (Outcome::N, Outcome::R) => Some(Ordering::Greater),
            (Outcome::P, Outcome::L) => Some(Ordering::Less),
            (Outcome::P, Outcome::N) => None,
            (Outcome::P, Outcome::P) => Some(Ordering::Equal),
            (Outcome::P, Outcome::R) => Some(Ordering::Greater),
            (Outcome::R, Outcome::L) => Some(Ordering::Less),
            (Outcome::R, Outcome::N) => Some(Ordering::Less),
            (Outcome::R, Outcome::P) => Some(Ordering::Less),
            (Outcome::R, Outcome::R) => Some(Ordering::Equal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct GameFormInner {
    left: Vec<GameFormInner>,
    right: Vec<GameFormInner>,
}

impl_total_wrapper! {
    /// A game form: the ordered lists of positions each player can move to
    ///
    /// [`PartialEq`] and [`PartialOrd`] compare game values, which is a
    /// partial order. Structurally distinct forms can be equal as values,
    /// e.g. the sum of star with itself and `{|}`. For structural identity
    /// use [`TotalWrappable`](crate::total::TotalWrappable) or wrap the form
    /// in [`TotalWrapper`](crate::total::TotalWrapper).
    #[derive(Debug, Clone)]
    pub struct GameForm {
        inner: GameFormInner
    }
}

impl Display for GameForm {
    /// Print the form using `{a, b, ...|c, d, ...}` notation, with integers
    /// shortened to their value
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_integer() {
            Some(n) => write!(f, "{}", n),
            None => display::braces(f, |f| {
                display::commas(f, self.moves(Player::Left))?;
                write!(f, "|")?;
                display::commas(f, self.moves(Player::Right))
            }),
        }
    }
}

impl GameForm {
    /// Construct a form from already constructed left and right options
    ///
    /// Option order is preserved verbatim and duplicates are kept. Order
    /// carries no game-theoretic meaning but keeps traversal traces
    /// deterministic.
    pub fn new(left: Vec<GameForm>, right: Vec<GameForm>) -> GameForm {
        GameForm {
            inner: GameFormInner {
                left: GameForm::into_inner_vec(left),
                right: GameForm::into_inner_vec(right),
            },
        }
    }

    /// Construct an integer form: `0 = {|}`, `n = {n-1|}` for positive `n`
    /// and `n = {|n+1}` for negative `n`
    pub fn new_integer(n: i32) -> GameForm {
        match n.cmp(&0) {
            Ordering::Less => GameForm::new(vec![], vec![GameForm::new_integer(n + 1)]),
            Ordering::Equal => GameForm::new(vec![], vec![]),
            Ordering::Greater => GameForm::new(vec![GameForm::new_integer(n - 1)], vec![]),
        }
    }

    /// Construct a nimber form: `*k = {*0, ..., *(k-1)|*0, ..., *(k-1)}`
    ///
    /// `*0` is the empty form and `*1` is star.
    pub fn new_nimber(k: u32) -> GameForm {
        let options = (0..k).map(GameForm::new_nimber).collect::<Vec<_>>();
        GameForm::new(options.clone(), options)
    }

    /// Convert the form to an integer if it is one
    pub fn to_integer(&self) -> Option<i32> {
        if self.is_end(Player::Left) && self.is_end(Player::Right) {
            Some(0)
        } else if let [gl] = self.moves(Player::Left)
            && self.is_end(Player::Right)
        {
            let prev = gl.to_integer()?;
            (prev >= 0).then_some(prev + 1)
        } else if let [gr] = self.moves(Player::Right)
            && self.is_end(Player::Left)
        {
            let prev = gr.to_integer()?;
            (prev <= 0).then_some(prev - 1)
        } else {
            None
        }
    }

    /// Get the options of the given player
    pub fn moves(&self, player: Player) -> &[GameForm] {
        match player {
            Player::Left => GameForm::from_inner_slice(self.inner.left.as_slice()),
            Player::Right => GameForm::from_inner_slice(self.inner.right.as_slice()),
        }
    }

    /// Check if the given player has no move. A form that is an end for both
    /// players is a terminal position
    #[inline]
    pub fn is_end(&self, player: Player) -> bool {
        self.moves(player).is_empty()
    }

    /// Maximum nesting depth of the form: 1 for `{|}`, otherwise one more
    /// than the deepest option of either player
    ///
    /// Every option is strictly shallower than its parent, so the height
    /// bounds the depth of any recursion over the form.
    pub fn height(&self) -> u32 {
        self.moves(Player::Left)
            .iter()
            .chain(self.moves(Player::Right))
            .map(GameForm::height)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Check if `player` wins under optimal play when `to_move` makes the
    /// next move
    ///
    /// The mover wins iff some of their options is won with the opponent to
    /// move; the non-mover wins iff every option of the mover is. A player
    /// who must move and has none loses (normal play convention), so the
    /// empty existential fails and the empty universal holds.
    pub fn wins(&self, player: Player, to_move: Player) -> bool {
        if player == to_move {
            self.moves(to_move)
                .iter()
                .any(|option| option.wins(player, to_move.opposite()))
        } else {
            self.moves(to_move)
                .iter()
                .all(|option| option.wins(player, to_move.opposite()))
        }
    }

    /// Check if `player` wins when they move first
    #[inline]
    pub fn wins_going_first(&self, player: Player) -> bool {
        self.wins(player, player)
    }

    /// Check if `player` wins when their opponent moves first
    #[inline]
    pub fn wins_going_second(&self, player: Player) -> bool {
        self.wins(player, player.opposite())
    }

    /// Check if `player` wins no matter who moves first
    #[inline]
    pub fn always_wins(&self, player: Player) -> bool {
        self.wins_going_first(player) && self.wins_going_second(player)
    }

    /// Outcome of the form under the normal play convention
    ///
    /// Exactly one of the four classes holds for every form, by determinacy
    /// of finite perfect information play.
    pub fn outcome(&self) -> Outcome {
        match (
            self.wins_going_first(Player::Left),
            self.wins_going_first(Player::Right),
        ) {
            (true, true) => Outcome::N,
            (true, false) => Outcome::L,
            (false, true) => Outcome::R,
            (false, false) => Outcome::P,
        }
    }

    /// Outcome of the form, memoizing the outcome of every visited position
    /// in the transposition table
    ///
    /// A player moving first wins iff some of their options they win moving
    /// second, i.e. the option's outcome is theirs or `P`. This
    /// reformulation recurses once per position, which is what makes
    /// per-position caching effective.
    pub fn outcome_with<TT>(&self, table: &TT) -> Outcome
    where
        TT: TranspositionTable<Self>,
    {
        if let Some(outcome) = table.lookup_position(self) {
            return outcome;
        }

        let left_wins_first = self
            .moves(Player::Left)
            .iter()
            .any(|gl| matches!(gl.outcome_with(table), Outcome::L | Outcome::P));
        let right_wins_first = self
            .moves(Player::Right)
            .iter()
            .any(|gr| matches!(gr.outcome_with(table), Outcome::R | Outcome::P));

        let outcome = match (left_wins_first, right_wins_first) {
            (true, true) => Outcome::N,
            (true, false) => Outcome::L,
            (false, true) => Outcome::R,
            (false, false) => Outcome::P,
        };
        table.insert_position(self.clone(), outcome);
        outcome
    }

    /// Construct the negative of a form by swapping the roles of the two
    /// players recursively. Alias for the unary `-` operator
    ///
    /// Involutive up to structural identity.
    #[must_use]
    pub fn construct_negative(&self) -> GameForm {
        GameForm::new(
            self.moves(Player::Right)
                .iter()
                .map(GameForm::construct_negative)
                .collect(),
            self.moves(Player::Left)
                .iter()
                .map(GameForm::construct_negative)
                .collect(),
        )
    }

    /// Construct the disjunctive sum of two forms. Alias for the `+` operator
    ///
    /// The mover picks exactly one component and moves in it, so every
    /// option of the sum replaces one argument with one of its own options.
    /// Each recursive call shrinks one of the two forms and both are finite,
    /// hence plain recursion terminates without a depth bound.
    pub fn construct_sum(g: &GameForm, h: &GameForm) -> GameForm {
        let mut left =
            Vec::with_capacity(g.moves(Player::Left).len() + h.moves(Player::Left).len());
        for gl in g.moves(Player::Left) {
            left.push(GameForm::construct_sum(gl, h));
        }
        for hl in h.moves(Player::Left) {
            left.push(GameForm::construct_sum(g, hl));
        }

        let mut right =
            Vec::with_capacity(g.moves(Player::Right).len() + h.moves(Player::Right).len());
        for gr in g.moves(Player::Right) {
            right.push(GameForm::construct_sum(gr, h));
        }
        for hr in h.moves(Player::Right) {
            right.push(GameForm::construct_sum(g, hr));
        }

        GameForm::new(left, right)
    }

    /// All forms whose left and right options are subsequences of `day`
    ///
    /// Yields forms, not values: the constructor does not normalize, so
    /// distinct option choices give structurally distinct forms.
    pub fn next_day(day: &[GameForm]) -> impl Iterator<Item = GameForm> {
        use itertools::Itertools;

        day.iter().powerset().flat_map(|left_moves| {
            day.iter().powerset().map(move |right_moves| {
                GameForm::new(
                    left_moves.clone().into_iter().cloned().collect(),
                    right_moves.into_iter().cloned().collect(),
                )
            })
        })
    }

    fn parse_list(mut p: Parser<'_>) -> Option<(Parser<'_>, Vec<GameForm>)> {
        let mut acc = Vec::new();
        loop {
            match lexeme!(p, GameForm::parse) {
                Some((option_p, option)) => {
                    acc.push(option);
                    p = option_p;
                    p = p.trim_whitespace();
                    match p.parse_ascii_char(',') {
                        Some(pp) => {
                            p = pp.trim_whitespace();
                        }
                        None => return Some((p, acc)),
                    }
                }
                None => return Some((p, acc)),
            }
        }
    }

    fn parse<'p>(p: Parser<'p>) -> Option<(Parser<'p>, GameForm)> {
        let p = p.trim_whitespace();
        if let Some(p) = p.parse_ascii_char('{') {
            let (p, left) = try_option!(GameForm::parse_list(p));
            let p = try_option!(p.parse_ascii_char('|'));
            let (p, right) = try_option!(GameForm::parse_list(p));
            let p = try_option!(p.parse_ascii_char('}'));
            let p = p.trim_whitespace();
            Some((p, GameForm::new(left, right)))
        } else {
            let (p, integer) = try_option!(lexeme!(p, Parser::parse_i64));
            Some((p, GameForm::new_integer(integer as i32)))
        }
    }
}

impl PartialEq for GameForm {
    /// Game value equality: two forms are equal iff the second player wins
    /// their difference
    #[inline]
    fn eq(&self, rhs: &Self) -> bool {
        matches!(self.partial_cmp(rhs), Some(Ordering::Equal))
    }
}

impl PartialOrd for GameForm {
    /// Game value comparison through the outcome of the difference:
    /// `Greater` iff Left always wins it, `Less` iff Right always wins it,
    /// `Equal` iff the second player wins it, and `None` (the forms are
    /// incomparable) iff the first player wins it
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        match (self - rhs).outcome() {
            Outcome::L => Some(Ordering::Greater),
            Outcome::R => Some(Ordering::Less),
            Outcome::P => Some(Ordering::Equal),
            Outcome::N => None,
        }
    }
}

impl_op_ex!(+|g: &GameForm, h: &GameForm| -> GameForm { GameForm::construct_sum(g, h) });
impl_op_ex!(+=|g: &mut GameForm, h: &GameForm| { *g = GameForm::construct_sum(g, h) });
impl_op_ex!(-|g: &GameForm| -> GameForm { GameForm::construct_negative(g) });
impl_op_ex!(-|g: &GameForm, h: &GameForm| -> GameForm {
    GameForm::construct_sum(g, &GameForm::construct_negative(h))
});
impl_op_ex!(-=|g: &mut GameForm, h: &GameForm| {
    *g = GameForm::construct_sum(g, &GameForm::construct_negative(h));
});

impl Sum for GameForm {
    fn sum<I: Iterator<Item = GameForm>>(iter: I) -> GameForm {
        iter.fold(GameForm::new_integer(0), |acc, g| acc + g)
    }
}

impl<'a> Sum<&'a GameForm> for GameForm {
    fn sum<I: Iterator<Item = &'a GameForm>>(iter: I) -> GameForm {
        iter.fold(GameForm::new_integer(0), |acc, g| acc + g)
    }
}

impl_from_str_via_parser!(GameForm);

#[cfg(any(test, feature = "quickcheck"))]
impl GameForm {
    fn arbitrary_sized(g: &mut quickcheck::Gen, mut size: i64) -> GameForm {
        use quickcheck::Arbitrary;

        let mut left = Vec::new();
        let mut right = Vec::new();

        while size > 0 {
            let option = if bool::arbitrary(g) {
                let n = i64::arbitrary(g).rem_euclid(size);
                size -= n + 1;
                if bool::arbitrary(g) {
                    GameForm::new_integer(n as i32)
                } else {
                    GameForm::new_integer(-(n as i32))
                }
            } else if bool::arbitrary(g) {
                let n = u32::arbitrary(g) % 3;
                size -= i64::from(n) + 1;
                GameForm::new_nimber(n)
            } else {
                let n = i64::arbitrary(g).rem_euclid(size);
                size -= n + 1;
                GameForm::arbitrary_sized(g, n)
            };

            if bool::arbitrary(g) {
                left.push(option);
            } else {
                right.push(option);
            }
        }

        GameForm::new(left, right)
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for GameForm {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = (g.size() / 2) as i64;
        GameForm::arbitrary_sized(g, size)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        use itertools::Itertools;
        use quickcheck::Arbitrary;

        if self.is_end(Player::Left) && self.is_end(Player::Right) {
            return quickcheck::empty_shrinker();
        }

        let this = self.clone();
        Box::new(
            this.moves(Player::Left)
                .to_vec()
                .shrink()
                .chain(std::iter::once(vec![]))
                .cartesian_product(
                    this.moves(Player::Right)
                        .to_vec()
                        .shrink()
                        .chain(std::iter::once(vec![]))
                        .collect::<Vec<_>>(),
                )
                .map(|(left, right)| GameForm::new(left, right)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        total::TotalWrappable,
        transposition_table::{NoTranspositionTable, ParallelTranspositionTable},
    };
    use quickcheck::{Arbitrary, Gen, QuickCheck};
    use std::str::FromStr;

    #[test]
    fn constructs_integers() {
        assert_eq!(&GameForm::new_integer(0).to_string(), "0");
        assert_eq!(&GameForm::new_integer(8).to_string(), "8");
        assert_eq!(&GameForm::new_integer(-42).to_string(), "-42");

        assert_eq!(GameForm::new_integer(1).to_integer(), Some(1));
        assert_eq!(GameForm::new_integer(-1).to_integer(), Some(-1));
        assert_eq!(
            GameForm::new(vec![], vec![GameForm::new_integer(1)]).to_integer(),
            None
        );
    }

    #[test]
    fn constructs_nimbers() {
        assert!(GameForm::new_nimber(0).total_eq(&GameForm::new_integer(0)));
        assert_eq!(&GameForm::new_nimber(1).to_string(), "{0|0}");
        assert_eq!(&GameForm::new_nimber(2).to_string(), "{0, {0|0}|0, {0|0}}");
    }

    #[test]
    fn option_order_is_preserved() {
        let g = GameForm::new(
            vec![GameForm::new_integer(2), GameForm::new_integer(1)],
            vec![GameForm::new_nimber(1), GameForm::new_integer(0)],
        );
        assert_eq!(&g.to_string(), "{2, 1|{0|0}, 0}");

        let twice = GameForm::new(
            vec![GameForm::new_integer(0), GameForm::new_integer(0)],
            vec![],
        );
        assert_eq!(&twice.to_string(), "{0, 0|}");
    }

    #[test]
    fn height_works() {
        assert_eq!(GameForm::new_integer(0).height(), 1);
        assert_eq!(GameForm::new_integer(-1).height(), 2);
        assert_eq!(GameForm::new_integer(2).height(), 3);
        assert_eq!(GameForm::new_nimber(1).height(), 2);
        assert_eq!(
            GameForm::construct_sum(&GameForm::new_nimber(1), &GameForm::new_nimber(1)).height(),
            3
        );
    }

    #[test]
    fn options_are_strictly_shallower() {
        let mut qc = QuickCheck::new();
        let test = |g: GameForm| {
            let height = g.height();
            assert!(
                g.moves(Player::Left)
                    .iter()
                    .chain(g.moves(Player::Right))
                    .all(|option| option.height() < height)
            );
        };
        qc.quickcheck(test as fn(GameForm));
    }

    #[test]
    fn negative() {
        assert!(
            GameForm::new_integer(3)
                .construct_negative()
                .total_eq(&GameForm::new_integer(-3))
        );

        let g = GameForm::new(vec![GameForm::new_integer(0)], vec![GameForm::new_integer(1)]);
        let expected = GameForm::new(vec![GameForm::new_integer(-1)], vec![GameForm::new_integer(0)]);
        assert!((-g).total_eq(&expected));
    }

    #[test]
    fn nimber_is_its_negative() {
        let star_two = GameForm::new_nimber(2);
        assert!((-&star_two).total_eq(&star_two));
    }

    #[test]
    fn negative_is_involutive() {
        let mut qc = QuickCheck::new();
        let test = |g: GameForm| {
            assert!((-(-&g)).total_eq(&g));
        };
        qc.quickcheck(test as fn(GameForm));
    }

    #[test]
    fn addition() {
        let one = GameForm::new_integer(1);
        assert_eq!(&(&one + &one).to_string(), "{1, 1|}");

        let star = GameForm::new_nimber(1);
        assert_eq!(
            &(&star + &star).to_string(),
            "{{0|0}, {0|0}|{0|0}, {0|0}}"
        );
    }

    #[test]
    fn sum_with_terminal_is_structural_identity() {
        let mut qc = QuickCheck::new();
        let test = |g: GameForm| {
            let zero = GameForm::new_integer(0);
            assert!(GameForm::construct_sum(&g, &zero).total_eq(&g));
            assert!(GameForm::construct_sum(&zero, &g).total_eq(&g));
        };
        qc.quickcheck(test as fn(GameForm));
    }

    #[test]
    fn outcomes_of_small_forms() {
        assert_eq!(GameForm::new_integer(0).outcome(), Outcome::P);
        assert_eq!(GameForm::new_integer(1).outcome(), Outcome::L);
        assert_eq!(GameForm::new_integer(2).outcome(), Outcome::L);
        assert_eq!(GameForm::new_integer(-1).outcome(), Outcome::R);
        assert_eq!(GameForm::new_nimber(1).outcome(), Outcome::N);
    }

    #[test]
    fn win_predicates_of_small_forms() {
        let zero = GameForm::new_integer(0);
        let one = GameForm::new_integer(1);
        let two = GameForm::new_integer(2);
        let minus_one = GameForm::new_integer(-1);
        let star = GameForm::new_nimber(1);

        assert!(!zero.always_wins(Player::Left));
        assert!(one.always_wins(Player::Left));
        assert!(two.always_wins(Player::Left));

        assert!(!zero.always_wins(Player::Right));
        assert!(!one.always_wins(Player::Right));
        assert!(minus_one.always_wins(Player::Right));

        // First player wins iff both players win moving first
        assert!(!Player::forall(|p| zero.wins_going_first(p)));
        assert!(!Player::forall(|p| one.wins_going_first(p)));
        assert!(Player::forall(|p| star.wins_going_first(p)));

        // Second player wins iff both players win moving second
        assert!(Player::forall(|p| zero.wins_going_second(p)));
        assert!(!Player::forall(|p| one.wins_going_second(p)));
        assert!(!Player::forall(|p| star.wins_going_second(p)));
    }

    #[test]
    fn wins_is_determined() {
        let mut qc = QuickCheck::new();
        let test = |g: GameForm, to_move: Player| {
            assert_ne!(
                g.wins(Player::Left, to_move),
                g.wins(Player::Right, to_move)
            );
        };
        qc.quickcheck(test as fn(GameForm, Player));
    }

    #[test]
    fn negative_swaps_winner() {
        let mut qc = QuickCheck::new();
        let test = |g: GameForm, player: Player, to_move: Player| {
            let negative = -&g;
            assert_eq!(
                g.wins(player, to_move),
                negative.wins(player.opposite(), to_move.opposite())
            );
            assert_eq!(
                g.wins_going_first(player),
                negative.wins_going_first(player.opposite())
            );
            assert_eq!(
                g.wins_going_second(player),
                negative.wins_going_second(player.opposite())
            );
        };
        qc.quickcheck(test as fn(GameForm, Player, Player));
    }

    #[test]
    fn outcome_matches_win_predicates() {
        let mut qc = QuickCheck::new();
        let test = |g: GameForm| {
            let outcome = g.outcome();
            assert_eq!(outcome == Outcome::L, g.always_wins(Player::Left));
            assert_eq!(outcome == Outcome::R, g.always_wins(Player::Right));
            assert_eq!(
                outcome == Outcome::N,
                Player::forall(|p| g.wins_going_first(p))
            );
            assert_eq!(
                outcome == Outcome::P,
                Player::forall(|p| g.wins_going_second(p))
            );
        };
        qc.quickcheck(test as fn(GameForm));
    }

    #[test]
    fn cached_outcome_matches_direct() {
        let mut qc = QuickCheck::new();
        let test = |g: GameForm| {
            let table = ParallelTranspositionTable::new();
            assert_eq!(g.outcome_with(&table), g.outcome());
            assert!(!table.is_empty());
            // Second run is served from the table
            assert_eq!(g.outcome_with(&table), g.outcome());

            assert_eq!(g.outcome_with(&NoTranspositionTable::new()), g.outcome());
        };
        qc.quickcheck(test as fn(GameForm));
    }

    #[test]
    fn compares_small_forms() {
        let zero = GameForm::new_integer(0);
        let star = GameForm::new_nimber(1);

        assert!(GameForm::new_integer(1) > zero);
        assert!(GameForm::new_integer(-1) < zero);
        assert_eq!(star.partial_cmp(&zero), None);

        // Star cancels itself out
        assert_eq!(&star + &star, zero);

        // A positive non-integer position
        let half = GameForm::new(vec![GameForm::new_integer(0)], vec![GameForm::new_integer(1)]);
        assert!(half > zero);
        assert!(half < GameForm::new_integer(1));
    }

    // Properties below go through differences of sums, whose form size grows
    // multiplicatively, so they drive a small generator by hand instead of
    // the default runner.

    #[test]
    fn exactly_one_comparison_holds() {
        let mut rnd = Gen::new(10);
        for _ in 0..100 {
            let g = GameForm::arbitrary(&mut rnd);
            let h = GameForm::arbitrary(&mut rnd);
            let classes = [
                g.partial_cmp(&h) == Some(Ordering::Greater),
                g.partial_cmp(&h) == Some(Ordering::Less),
                g == h,
                g.partial_cmp(&h).is_none(),
            ];
            assert_eq!(classes.iter().filter(|held| **held).count(), 1);
        }
    }

    #[test]
    fn comparison_is_antisymmetric() {
        let mut rnd = Gen::new(10);
        for _ in 0..100 {
            let g = GameForm::arbitrary(&mut rnd);
            let h = GameForm::arbitrary(&mut rnd);
            assert_eq!(g.partial_cmp(&h), h.partial_cmp(&g).map(Ordering::reverse));
        }
    }

    #[test]
    fn sum_with_zero_keeps_value() {
        let mut rnd = Gen::new(8);
        for _ in 0..100 {
            let g = GameForm::arbitrary(&mut rnd);
            assert_eq!(&g + GameForm::new_integer(0), g);
        }
    }

    #[test]
    fn sum_commutes_up_to_value() {
        let mut rnd = Gen::new(8);
        for _ in 0..100 {
            let g = GameForm::arbitrary(&mut rnd);
            let h = GameForm::arbitrary(&mut rnd);
            assert_eq!(&g + &h, &h + &g);
        }
    }

    #[test]
    fn sum_associates_up_to_value() {
        let mut rnd = Gen::new(6);
        for _ in 0..100 {
            let g = GameForm::arbitrary(&mut rnd);
            let h = GameForm::arbitrary(&mut rnd);
            let k = GameForm::arbitrary(&mut rnd);
            assert_eq!((&g + &h) + &k, &g + (&h + &k));
        }
    }

    #[test]
    fn negative_is_additive_inverse() {
        let mut rnd = Gen::new(12);
        for _ in 0..100 {
            let g = GameForm::arbitrary(&mut rnd);
            assert_eq!((&g - &g).outcome(), Outcome::P);
            assert_eq!(&g - &g, GameForm::new_integer(0));
        }
    }

    #[test]
    fn sums_forms() {
        let games = vec![
            GameForm::new_integer(1),
            GameForm::new_integer(-1),
            GameForm::new_nimber(1),
        ];
        let total: GameForm = games.iter().sum();
        assert_eq!(total.outcome(), Outcome::N);
    }

    #[test]
    fn parsing() {
        assert!(GameForm::from_str("42").unwrap().total_eq(&GameForm::new_integer(42)));
        assert!(GameForm::from_str("-3").unwrap().total_eq(&GameForm::new_integer(-3)));
        assert!(GameForm::from_str("{|}").unwrap().total_eq(&GameForm::new_integer(0)));
        assert!(
            GameForm::from_str("{0|0}")
                .unwrap()
                .total_eq(&GameForm::new_nimber(1))
        );

        let parsed = GameForm::from_str(" { 1 , { 0 | 0 } | -1 } ").unwrap();
        let expected = GameForm::new(
            vec![GameForm::new_integer(1), GameForm::new_nimber(1)],
            vec![GameForm::new_integer(-1)],
        );
        assert!(parsed.total_eq(&expected));

        assert!(GameForm::from_str("{1|").is_err());
        assert!(GameForm::from_str("{1|}x").is_err());
        assert!(GameForm::from_str("star").is_err());
    }

    #[test]
    fn parsing_preserves_structure() {
        let mut qc = QuickCheck::new();
        let test = |g: GameForm| {
            assert!(GameForm::from_str(&g.to_string()).unwrap().total_eq(&g));
        };
        qc.quickcheck(test as fn(GameForm));
    }

    #[test]
    fn born_by_day() {
        let day0 = vec![GameForm::new_integer(0)];

        let day1 = GameForm::next_day(&day0).collect::<Vec<_>>();
        assert_eq!(
            day1.iter()
                .map(std::string::ToString::to_string)
                .collect::<Vec<String>>(),
            vec!["0", "-1", "1", "{0|0}"],
        );

        let day2 = GameForm::next_day(&day1);
        assert_eq!(day2.count(), 256);
    }

    #[test]
    fn outcome_order() {
        assert_eq!(&Outcome::L.to_string(), "L");
        assert_eq!(&Outcome::N.to_string(), "N");
        assert_eq!(&Outcome::P.to_string(), "P");
        assert_eq!(&Outcome::R.to_string(), "R");

        assert!(Outcome::L > Outcome::N);
        assert!(Outcome::L > Outcome::P);
        assert!(Outcome::L > Outcome::R);
        assert!(Outcome::N > Outcome::R);
        assert!(Outcome::P > Outcome::R);
        assert_eq!(Outcome::N.partial_cmp(&Outcome::P), None);
    }
}
