use forage_data::{FoodItem, Vec3};

/// Nearest unconsumed food on the horizontal plane.
///
/// Equal distances resolve to the lowest food id, independent of slice order.
#[must_use]
pub fn select_target<'a>(position: &Vec3, food: &'a [FoodItem]) -> Option<(usize, &'a FoodItem)> {
    food.iter()
        .enumerate()
        .filter(|(_, f)| !f.consumed)
        .min_by(|(_, a), (_, b)| {
            position
                .horizontal_distance_sq(&a.position)
                .total_cmp(&position.horizontal_distance_sq(&b.position))
                .then_with(|| a.id.cmp(&b.id))
        })
}
