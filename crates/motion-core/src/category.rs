use crate::error::MotionError;
use std::fmt;
use std::str::FromStr;

/// Menu item category, read once from the item's `data-type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Coffee,
    Chai,
    ColdBrew,
    Snack,
    Dessert,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Coffee,
        Category::Chai,
        Category::ColdBrew,
        Category::Snack,
        Category::Dessert,
        Category::Other,
    ];

    /// Resolve an attribute value. Missing or unrecognized tags fall back
    /// to [`Category::Other`].
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::parse::<Category>) {
            Some(Ok(category)) => category,
            Some(Err(e)) => {
                log::debug!("[menu] {}, using default hover", e);
                Category::Other
            }
            None => Category::Other,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Category::Coffee => "coffee",
            Category::Chai => "chai",
            Category::ColdBrew => "cold-brew",
            Category::Snack => "snack",
            Category::Dessert => "dessert",
            Category::Other => "other",
        }
    }
}

impl FromStr for Category {
    type Err = MotionError;

    // Exact match only: "Coffee" or " coffee" are not coffee.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coffee" => Ok(Category::Coffee),
            "chai" => Ok(Category::Chai),
            "cold-brew" => Ok(Category::ColdBrew),
            "snack" => Ok(Category::Snack),
            "dessert" => Ok(Category::Dessert),
            _ => Err(MotionError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
