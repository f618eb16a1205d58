use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

// Service fee is a percentage of the gross withdrawal.
pub const FEE_DENOMINATOR: u64 = 100;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayoutToken {
    Native { denom: String },
    Cw20 { contract_addr: Addr },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    // Fee sink and sweep target. Implicitly privileged.
    pub treasury_wallet: Addr,
    // Token paid out on withdrawal.
    pub payout_token: PayoutToken,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Parameters {
    // Points per unit of payout token, never zero.
    pub ratio: u64,
    // Cap on the cumulative gross amount paid out.
    pub max_reward_total: Uint128,
    // Minimum point amount per swap and minimum gross amount per withdrawal.
    pub minimum_amount: Uint128,
    // Percentage of each withdrawal routed to the treasury wallet.
    pub service_fee: u64,
}

impl Parameters {
    pub fn validate(&self) -> Result<(), ContractError> {
        validate_ratio(self.ratio)?;
        validate_service_fee(self.service_fee)
    }
}

pub fn validate_ratio(ratio: u64) -> Result<(), ContractError> {
    if ratio == 0 {
        return Err(ContractError::InvalidParameter {
            reason: "ratio must be at least 1".to_string(),
        });
    }
    Ok(())
}

pub fn validate_service_fee(fee: u64) -> Result<(), ContractError> {
    if fee > FEE_DENOMINATOR {
        return Err(ContractError::InvalidParameter {
            reason: format!("service fee must not exceed {}", FEE_DENOMINATOR),
        });
    }
    Ok(())
}

/// Campaign lifecycle phase.
///
/// `Active` admits swaps and withdrawals, `Closed` halts them and `Finalized`
/// is terminal. The wire code of each phase is its position: 0, 1, 2.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CampaignState {
    Active,
    Closed,
    Finalized,
}

impl CampaignState {
    pub fn from_code(code: u8) -> Result<Self, ContractError> {
        match code {
            0 => Ok(CampaignState::Active),
            1 => Ok(CampaignState::Closed),
            2 => Ok(CampaignState::Finalized),
            _ => Err(ContractError::InvalidParameter {
                reason: format!("unknown campaign state {}", code),
            }),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            CampaignState::Active => 0,
            CampaignState::Closed => 1,
            CampaignState::Finalized => 2,
        }
    }

    pub fn can_transition_to(self, next: CampaignState) -> bool {
        use CampaignState::*;

        match (self, next) {
            (from, to) if from == to => true,
            (Active, Closed) | (Closed, Active) | (Closed, Finalized) => true,
            _ => false,
        }
    }

    pub fn transition(self, next: CampaignState) -> Result<CampaignState, ContractError> {
        if !self.can_transition_to(next) {
            return Err(ContractError::InvalidStateTransition {
                from: self.to_string(),
                to: next.to_string(),
            });
        }
        Ok(next)
    }
}

impl std::fmt::Display for CampaignState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CampaignState::Active => write!(f, "active"),
            CampaignState::Closed => write!(f, "closed"),
            CampaignState::Finalized => write!(f, "finalized"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Participant {
    // Registered wallet, destination of payouts.
    pub wallet: Addr,
    // External user id bound by the point system.
    pub user_id: String,
    // Cumulative gross amount withdrawn.
    pub claimed: Uint128,
    // Amount currently available to withdraw.
    pub claimable: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, Default)]
pub struct Totals {
    pub participant_count: u64,
    // Payout units credited through swaps.
    pub total_allocated: Uint128,
    // Gross amount withdrawn, fees included.
    pub total_paid_out: Uint128,
    pub total_fees: Uint128,
    pub total_deposited: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const PARAMETERS: Item<Parameters> = Item::new("parameters");

pub const CAMPAIGN_STATE: Item<CampaignState> = Item::new("campaign_state");

pub const TOTALS: Item<Totals> = Item::new("totals");

pub const ADMINS: Map<&Addr, bool> = Map::new("admins");

pub const PARTICIPANTS: Map<u64, Participant> = Map::new("participants");

pub const WALLET_INDEX: Map<&Addr, u64> = Map::new("wallet_index");
