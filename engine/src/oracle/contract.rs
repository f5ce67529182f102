use models::Card;

/// Checks a single choice against its candidate set.
pub fn check_member<T: PartialEq + std::fmt::Debug>(choice: &T, candidates: &[T]) -> Result<(), String> {
    if candidates.contains(choice) {
        Ok(())
    } else {
        Err(format!("{choice:?} is not one of {} candidates", candidates.len()))
    }
}

/// Checks a multi-select answer: size within `[min, max]`, subset of the candidates, no duplicates.
pub fn check_multiple(chosen: &[Card], candidates: &[Card], min: usize, max: usize) -> Result<(), String> {
    if chosen.len() < min || chosen.len() > max {
        return Err(format!(
            "selected {} cards, expected between {min} and {max}",
            chosen.len()
        ));
    }
    for (index, card) in chosen.iter().enumerate() {
        if !candidates.iter().any(|c| c.id == card.id) {
            return Err(format!("card {} was not offered", card.id));
        }
        if chosen[..index].iter().any(|c| c.id == card.id) {
            return Err(format!("card {} selected twice", card.id));
        }
    }
    Ok(())
}
