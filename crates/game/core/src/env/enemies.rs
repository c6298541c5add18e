/// Inclusive damage range of an enemy attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRange {
    pub min: u32,
    pub max: u32,
}

impl AttackRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, damage: u32) -> bool {
        (self.min..=self.max).contains(&damage)
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Read-only enemy template from the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: String,
    pub display_name: String,
    /// Opaque reference handed to the renderer (e.g. an image path).
    pub sprite: String,
    pub max_hp: u32,
    pub attack: AttackRange,
}

impl EnemyTemplate {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        sprite: impl Into<String>,
        max_hp: u32,
        attack: AttackRange,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            sprite: sprite.into(),
            max_hp,
            attack,
        }
    }
}

/// Static enemy roster loaded once at startup.
pub trait EnemyOracle: Send + Sync {
    fn roster(&self) -> &[EnemyTemplate];

    fn template(&self, id: &str) -> Option<&EnemyTemplate> {
        self.roster().iter().find(|template| template.id == id)
    }
}

impl EnemyOracle for Vec<EnemyTemplate> {
    fn roster(&self) -> &[EnemyTemplate] {
        self
    }
}
