use crate::rng::RandomSource;
use schema::{BaseStats, IvSet, Nature, StatBlock, StatName};

/// Level ceiling applied everywhere a level is consumed or raised.
pub const MAX_LEVEL: u8 = 100;
/// Upper bound of a hidden quality roll.
pub const IV_MAX: u8 = 31;
/// Mode of the triangular distribution IVs are drawn from.
pub const IV_MODE: u8 = 15;

/// Map one uniform draw onto the triangular distribution over [0, IV_MAX]
/// with mode IV_MODE, via the inverse CDF, then truncate to an integer.
fn triangular_iv(unit: f32) -> u8 {
    let max = IV_MAX as f32;
    let mode = IV_MODE as f32;
    let knee = mode / max;

    let value = if unit < knee {
        (unit * max * mode).sqrt()
    } else {
        max - ((1.0 - unit) * max * (max - mode)).sqrt()
    };
    (value as u8).min(IV_MAX)
}

/// Draw a fresh set of hidden quality rolls, one per stat. Every component
/// lands in [0, IV_MAX]; rolls cluster around IV_MODE.
pub fn generate_ivs(rng: &mut dyn RandomSource) -> IvSet {
    IvSet {
        hp: triangular_iv(rng.unit("HP IV roll")),
        attack: triangular_iv(rng.unit("Attack IV roll")),
        defense: triangular_iv(rng.unit("Defense IV roll")),
        sp_attack: triangular_iv(rng.unit("Special Attack IV roll")),
        sp_defense: triangular_iv(rng.unit("Special Defense IV roll")),
        speed: triangular_iv(rng.unit("Speed IV roll")),
    }
}

/// Derive one concrete stat before any nature adjustment.
/// Formula: floor(((2 * base + iv) * level) / 100) + bonus, where the bonus
/// is level + 10 for HP and 5 for everything else.
/// Level is clamped into [1, MAX_LEVEL] and base to at least 1 before use.
pub fn calculate_stat(base: u8, iv: u8, level: u8, is_hp: bool) -> u16 {
    let level = level.clamp(1, MAX_LEVEL) as u32;
    let base = base.max(1) as u32;

    let core = (2 * base + iv as u32) * level / 100;
    let bonus = if is_hp { level + 10 } else { 5 };
    (core + bonus) as u16
}

/// Apply a nature to one derived stat: floor(value * 1.1) on the nature's
/// boosted stat, floor(value * 0.9) on its cut stat, identity otherwise.
/// HP is never nature-modified.
pub fn apply_nature_modifier(value: u16, stat: StatName, nature: Nature) -> u16 {
    if stat == StatName::Hp {
        return value;
    }
    (value as f64 * nature.multiplier_for(stat)).floor() as u16
}

/// Derive the full stat block for one creature: base formula per stat, then
/// the nature adjustment on top.
pub fn calculate_stat_block(
    base_stats: &BaseStats,
    ivs: &IvSet,
    level: u8,
    nature: Nature,
) -> StatBlock {
    let derive = |stat: StatName| {
        let raw = calculate_stat(
            base_stats.get(stat),
            ivs.get(stat),
            level,
            stat == StatName::Hp,
        );
        apply_nature_modifier(raw, stat, nature)
    };

    StatBlock {
        hp: derive(StatName::Hp),
        attack: derive(StatName::Attack),
        defense: derive(StatName::Defense),
        sp_attack: derive(StatName::SpAttack),
        sp_defense: derive(StatName::SpDefense),
        speed: derive(StatName::Speed),
    }
}

/// Carry current HP across a change in maximum HP, as happens on level-up
/// and evolution. Scales proportionally, rounds down, clamps to the new
/// maximum, and keeps a conscious creature at 1 or more. A fainted creature
/// stays at 0.
pub fn rescale_hp(current: u16, old_max: u16, new_max: u16) -> u16 {
    if current == 0 {
        return 0;
    }
    if old_max == 0 {
        return new_max;
    }
    let scaled = current as u32 * new_max as u32 / old_max as u32;
    scaled.clamp(1, new_max as u32) as u16
}
