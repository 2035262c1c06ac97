// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use std::convert::TryFrom;

use super::grid::Summary;
use super::instruction::Action;

/// Cell semantics for one run: plain on/off lights, or lights with a brightness.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Policy {
    Boolean,
    Integer,
}
impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Policy::Boolean => "analog",
            Policy::Integer => "digital",
        })
    }
}
impl TryFrom<&str> for Policy {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "analog"  => Ok(Policy::Boolean),
            "digital" => Ok(Policy::Integer),
            _         => Err("Not a valid Policy value")
        }
    }
}
impl Default for Policy {
    fn default() -> Self { Policy::Boolean }
}

// ------------------------------------------------

pub type Transform<L> = fn(L) -> L;

/// A cell value of the grid. Each implementor carries its own row of the
/// (action, policy) lookup table, indexed by `Action::index`.
pub trait Light: Copy + Default + fmt::Debug {
    const POLICY: Policy;
    const TRANSFORMS: [Transform<Self>; 3];

    fn transform(action: Action) -> Transform<Self> {
        Self::TRANSFORMS[action.index()]
    }
    fn summarize<'a, I>(cells: I) -> Summary
        where I: Iterator<Item = &'a Self>, Self: 'a;
}

fn switch_on(_: bool) -> bool { true }
fn switch_off(_: bool) -> bool { false }
fn flip(v: bool) -> bool { !v }

impl Light for bool {
    const POLICY: Policy = Policy::Boolean;
    const TRANSFORMS: [Transform<bool>; 3] = [switch_on, switch_off, flip];

    fn summarize<'a, I>(cells: I) -> Summary
        where I: Iterator<Item = &'a bool>
    {
        Summary::LightsOn(cells.filter(|lit| **lit).count() as u64)
    }
}

fn brighten(v: u32) -> u32 { v.saturating_add(1) }
fn dim(v: u32) -> u32 { v.saturating_sub(1) }
fn brighten_twice(v: u32) -> u32 { v.saturating_add(2) }

impl Light for u32 {
    const POLICY: Policy = Policy::Integer;
    const TRANSFORMS: [Transform<u32>; 3] = [brighten, dim, brighten_twice];

    fn summarize<'a, I>(cells: I) -> Summary
        where I: Iterator<Item = &'a u32>
    {
        Summary::TotalBrightness(cells.map(|v| u64::from(*v)).sum())
    }
}
