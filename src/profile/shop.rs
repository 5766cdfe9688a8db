//! Upgrade shop. Upgrades are permanent and bought once with currency.

use super::types::Profile;
use crate::snake::types::Upgrades;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeId {
    Magnet,
    Shield,
    Duration,
}

impl UpgradeId {
    pub const ALL: [UpgradeId; 3] = [UpgradeId::Magnet, UpgradeId::Shield, UpgradeId::Duration];

    pub fn price(&self) -> u32 {
        match self {
            UpgradeId::Magnet => 100,
            UpgradeId::Shield => 150,
            UpgradeId::Duration => 200,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeId::Magnet => "Magnet",
            UpgradeId::Shield => "Shield",
            UpgradeId::Duration => "Overclock",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UpgradeId::Magnet => "Pulls nearby food toward your head",
            UpgradeId::Shield => "Absorbs one crash per run",
            UpgradeId::Duration => "Power-ups last 50% longer",
        }
    }

    pub fn is_owned(&self, upgrades: &Upgrades) -> bool {
        match self {
            UpgradeId::Magnet => upgrades.magnet,
            UpgradeId::Shield => upgrades.shield,
            UpgradeId::Duration => upgrades.duration,
        }
    }

    fn grant(&self, upgrades: &mut Upgrades) {
        match self {
            UpgradeId::Magnet => upgrades.magnet = true,
            UpgradeId::Shield => upgrades.shield = true,
            UpgradeId::Duration => upgrades.duration = true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("already owned")]
    AlreadyOwned,
    #[error("costs {price}, you have {currency}")]
    InsufficientFunds { price: u32, currency: u32 },
}

/// Buy an upgrade, deducting its price. The caller persists the wallet.
pub fn buy_upgrade(profile: &mut Profile, id: UpgradeId) -> Result<(), PurchaseError> {
    if id.is_owned(&profile.upgrades) {
        return Err(PurchaseError::AlreadyOwned);
    }
    let price = id.price();
    if profile.currency < price {
        return Err(PurchaseError::InsufficientFunds {
            price,
            currency: profile.currency,
        });
    }
    profile.currency -= price;
    id.grant(&mut profile.upgrades);
    info!(upgrade = id.name(), price, "upgrade purchased");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_deducts_price() {
        let mut profile = Profile {
            currency: 260,
            ..Default::default()
        };
        buy_upgrade(&mut profile, UpgradeId::Shield).unwrap();
        assert_eq!(profile.currency, 110);
        assert!(profile.upgrades.shield);
        assert_eq!(
            buy_upgrade(&mut profile, UpgradeId::Shield),
            Err(PurchaseError::AlreadyOwned)
        );
    }

    #[test]
    fn test_cannot_afford() {
        let mut profile = Profile {
            currency: 199,
            ..Default::default()
        };
        assert_eq!(
            buy_upgrade(&mut profile, UpgradeId::Duration),
            Err(PurchaseError::InsufficientFunds {
                price: 200,
                currency: 199
            })
        );
        assert_eq!(profile.currency, 199);
        assert!(!profile.upgrades.duration);
    }
}
