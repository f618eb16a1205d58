use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Uint128;
use cw20::Cw20ReceiveMsg;

use crate::state::{Participant, Totals};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayoutTokenMsg {
    Native { denom: String },
    Cw20 { contract_addr: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    // Defaults to the instantiating wallet.
    pub treasury_wallet: Option<String>,
    pub payout_token: PayoutTokenMsg,

    pub ratio: u64,
    pub max_reward_total: Uint128,
    pub minimum_amount: Uint128,
    pub service_fee: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /************** Access *************/
    AddAdmin {
        wallet: String,
    },
    RemoveAdmin {
        wallet: String,
    },
    ChangeTreasuryWallet {
        wallet: String,
    },

    /************** Parameters *************/
    ChangeMaxReward {
        amount: Uint128,
    },
    ChangeRatio {
        ratio: u64,
    },
    SetMinimumAmount {
        amount: Uint128,
    },
    SetServiceFee {
        fee: u64,
    },

    /************** Lifecycle *************/
    ChangeState {
        state: u8,
    },
    SetStateActive {},
    SetStateClosed {},

    /************** Ledger *************/
    RegisterWallet {
        wallet: String,
        user_id: String,
    },
    UpdateParticipantClaims {
        index: u64,
        claimed: Uint128,
        claimable: Uint128,
    },
    UpdateParticipantId {
        index: u64,
        user_id: String,
    },
    SwapMtePointsToMatic {
        point_amount: Uint128,
        index: u64,
    },
    WithdrawMaticTokens {
        index: u64,
        amount: Option<Uint128>,
    },

    /************** Treasury *************/
    Deposit {},
    Receive(Cw20ReceiveMsg),
    WithdrawRemainingFunds {
        receiver: Option<String>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Cw20HookMsg {
    Deposit {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    IsAdmin {
        wallet: String,
    },
    Admins {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    TreasuryWallet {},
    Config {},
    Ratio {},
    MaxRewardTotal {},
    GetMinimumAmount {},
    GetServiceFee {},
    GetState {},
    WalletRegistered {
        wallet: String,
    },
    ParticipantIndex {
        wallet: String,
    },
    ParticipantsCount {},
    GetParticipant {
        index: u64,
    },
    GetParticipants {
        page: u64,
        limit: u64,
    },
    GetAllParticipants {},
    Totals {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub treasury_wallet: String,
    pub payout_token: PayoutTokenMsg,
    pub ratio: u64,
    pub max_reward_total: Uint128,
    pub minimum_amount: Uint128,
    pub service_fee: u64,
    pub state: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AdminsResponse {
    pub admins: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ParticipantsCountResponse {
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GetParticipantResponse {
    pub index: u64,
    pub data: Participant,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GetParticipantsResponse {
    pub participants: Vec<Participant>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TotalsResponse {
    pub data: Totals,
}
