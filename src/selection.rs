use crate::moth::Moth;

/// Moths that stay hidden against the given background brightness, in
/// population order. May be empty.
pub fn select_survivors(moths: &[Moth], background: i32) -> Vec<Moth> {
    moths
        .iter()
        .filter(|moth| moth.is_camouflaged(background))
        .copied()
        .collect()
}
