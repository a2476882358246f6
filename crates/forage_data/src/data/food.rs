use super::geometry::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Visual kind of a food item. Has no gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodShape {
    Cube,
    Sphere,
    Tetrahedron,
}

impl FoodShape {
    pub const ALL: [FoodShape; 3] = [FoodShape::Cube, FoodShape::Sphere, FoodShape::Tetrahedron];
}

/// A stationary food item. Once `consumed` it stays consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u32,
    pub position: Vec3,
    pub shape: FoodShape,
    pub color: Color,
    pub consumed: bool,
}

impl FoodItem {
    #[must_use]
    pub fn new(id: u32, position: Vec3, shape: FoodShape, color: Color) -> Self {
        Self {
            id,
            position,
            shape,
            color,
            consumed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_food_is_unconsumed() {
        let food = FoodItem::new(3, Vec3::new(1.0, 0.5, -2.0), FoodShape::Cube, Color::default());
        assert!(!food.consumed);
        assert_eq!(food.id, 3);
    }

    #[test]
    fn test_food_serde_shape_names() {
        let json = serde_json::to_string(&FoodShape::Tetrahedron).expect("serialize shape");
        assert_eq!(json, "\"Tetrahedron\"");
    }
}
