use cosmwasm_std::{
    Deps, DepsMut, Env, MessageInfo, Order, Response, StdError, StdResult, Storage, Uint128,
};
use cw_storage_plus::Bound;

use crate::access::{assert_admin, is_privileged, MAX_LIMIT};
use crate::error::ContractError;
use crate::msg::{GetParticipantResponse, GetParticipantsResponse, ParticipantsCountResponse};
use crate::state::{
    CampaignState, Config, Parameters, Participant, Totals, CAMPAIGN_STATE, CONFIG,
    FEE_DENOMINATOR, PARAMETERS, PARTICIPANTS, TOTALS, WALLET_INDEX,
};
use crate::treasury::{attached_deposit, available_funds, transfer_msg};

fn assert_active(storage: &dyn Storage) -> Result<(), ContractError> {
    let state = CAMPAIGN_STATE.load(storage)?;
    if state != CampaignState::Active {
        return Err(ContractError::InvalidPhase {
            state: state.to_string(),
        });
    }
    Ok(())
}

fn load_participant(storage: &dyn Storage, index: u64) -> Result<Participant, ContractError> {
    PARTICIPANTS
        .may_load(storage, index)?
        .ok_or(ContractError::NotRegistered { index })
}

/// Gross amount split into (fee, net). The fee rounds down.
pub fn split_fee(gross: Uint128, service_fee: u64) -> Result<(Uint128, Uint128), ContractError> {
    let fee = gross.multiply_ratio(service_fee, FEE_DENOMINATOR);
    let net = gross.checked_sub(fee)?;
    Ok((fee, net))
}

pub fn execute_register_wallet(
    deps: DepsMut,
    info: MessageInfo,
    wallet: String,
    user_id: String,
) -> Result<Response, ContractError> {
    assert_admin(deps.storage, &info.sender)?;

    let wallet = deps.api.addr_validate(&wallet)?;
    if user_id.is_empty() {
        return Err(ContractError::InvalidParameter {
            reason: "user id must not be empty".to_string(),
        });
    }
    if WALLET_INDEX.has(deps.storage, &wallet) {
        return Err(ContractError::AlreadyRegistered {
            wallet: wallet.to_string(),
        });
    }

    let mut totals: Totals = TOTALS.load(deps.storage)?;
    let index = totals.participant_count;
    let participant = Participant {
        wallet: wallet.clone(),
        user_id: user_id.clone(),
        claimed: Uint128::zero(),
        claimable: Uint128::zero(),
    };
    totals.participant_count += 1;

    PARTICIPANTS.save(deps.storage, index, &participant)?;
    WALLET_INDEX.save(deps.storage, &wallet, &index)?;
    TOTALS.save(deps.storage, &totals)?;

    Ok(Response::new()
        .add_attribute("method", "register_wallet")
        .add_attribute("wallet", wallet)
        .add_attribute("user_id", user_id)
        .add_attribute("index", index.to_string()))
}

pub fn execute_update_participant_claims(
    deps: DepsMut,
    info: MessageInfo,
    index: u64,
    claimed: Uint128,
    claimable: Uint128,
) -> Result<Response, ContractError> {
    assert_admin(deps.storage, &info.sender)?;

    let mut participant = load_participant(deps.storage, index)?;
    let (old_claimed, old_claimable) = (participant.claimed, participant.claimable);
    participant.claimed = claimed;
    participant.claimable = claimable;
    PARTICIPANTS.save(deps.storage, index, &participant)?;

    Ok(Response::new()
        .add_attribute("method", "update_participant_claims")
        .add_attribute("admin_override", info.sender)
        .add_attribute("index", index.to_string())
        .add_attribute("old_claimed", old_claimed)
        .add_attribute("old_claimable", old_claimable)
        .add_attribute("claimed", claimed)
        .add_attribute("claimable", claimable))
}

pub fn execute_update_participant_id(
    deps: DepsMut,
    info: MessageInfo,
    index: u64,
    user_id: String,
) -> Result<Response, ContractError> {
    assert_admin(deps.storage, &info.sender)?;

    if user_id.is_empty() {
        return Err(ContractError::InvalidParameter {
            reason: "user id must not be empty".to_string(),
        });
    }
    let mut participant = load_participant(deps.storage, index)?;
    let old_user_id = std::mem::replace(&mut participant.user_id, user_id.clone());
    PARTICIPANTS.save(deps.storage, index, &participant)?;

    Ok(Response::new()
        .add_attribute("method", "update_participant_id")
        .add_attribute("admin_override", info.sender)
        .add_attribute("index", index.to_string())
        .add_attribute("old_user_id", old_user_id)
        .add_attribute("user_id", user_id))
}

pub fn execute_swap_points(
    deps: DepsMut,
    info: MessageInfo,
    point_amount: Uint128,
    index: u64,
) -> Result<Response, ContractError> {
    assert_admin(deps.storage, &info.sender)?;
    assert_active(deps.storage)?;

    let params: Parameters = PARAMETERS.load(deps.storage)?;
    if point_amount.is_zero() {
        return Err(ContractError::InvalidParameter {
            reason: "point amount must be positive".to_string(),
        });
    }
    if point_amount < params.minimum_amount {
        return Err(ContractError::BelowMinimumAmount {
            amount: point_amount,
            minimum: params.minimum_amount,
        });
    }

    let mut participant = load_participant(deps.storage, index)?;
    // truncates toward zero
    let converted = point_amount.checked_div(Uint128::from(params.ratio))?;

    let mut totals: Totals = TOTALS.load(deps.storage)?;
    participant.claimable = participant.claimable.checked_add(converted)?;
    totals.total_allocated = totals.total_allocated.checked_add(converted)?;

    PARTICIPANTS.save(deps.storage, index, &participant)?;
    TOTALS.save(deps.storage, &totals)?;

    Ok(Response::new()
        .add_attribute("method", "swap_mte_points_to_matic")
        .add_attribute("index", index.to_string())
        .add_attribute("point_amount", point_amount)
        .add_attribute("ratio", params.ratio.to_string())
        .add_attribute("converted", converted)
        .add_attribute("claimable", participant.claimable))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    index: u64,
    amount: Option<Uint128>,
) -> Result<Response, ContractError> {
    assert_active(deps.storage)?;

    let mut participant = load_participant(deps.storage, index)?;
    if info.sender != participant.wallet && !is_privileged(deps.storage, &info.sender)? {
        return Err(ContractError::Unauthorized {});
    }

    let config: Config = CONFIG.load(deps.storage)?;
    let params: Parameters = PARAMETERS.load(deps.storage)?;
    let mut totals: Totals = TOTALS.load(deps.storage)?;

    let deposit = attached_deposit(&config.payout_token, &info)?;

    let gross = amount.unwrap_or(participant.claimable);
    if gross.is_zero() {
        return Err(ContractError::InvalidParameter {
            reason: "nothing to withdraw".to_string(),
        });
    }
    if gross < params.minimum_amount {
        return Err(ContractError::BelowMinimumAmount {
            amount: gross,
            minimum: params.minimum_amount,
        });
    }
    if gross > participant.claimable {
        return Err(ContractError::InsufficientBalance {
            requested: gross,
            available: participant.claimable,
        });
    }

    let paid_out = totals.total_paid_out.checked_add(gross)?;
    if paid_out > params.max_reward_total {
        return Err(ContractError::RewardCapExceeded {
            requested: gross,
            remaining: params.max_reward_total.saturating_sub(totals.total_paid_out),
        });
    }

    // attached funds are already credited to the contract
    let funds = available_funds(deps.as_ref(), &env, &config.payout_token)?;
    if funds < gross {
        return Err(ContractError::InsufficientBalance {
            requested: gross,
            available: funds,
        });
    }

    let (fee, net) = split_fee(gross, params.service_fee)?;

    participant.claimable = participant.claimable.checked_sub(gross)?;
    participant.claimed = participant.claimed.checked_add(gross)?;
    totals.total_paid_out = paid_out;
    totals.total_fees = totals.total_fees.checked_add(fee)?;
    totals.total_deposited = totals.total_deposited.checked_add(deposit)?;

    PARTICIPANTS.save(deps.storage, index, &participant)?;
    TOTALS.save(deps.storage, &totals)?;

    let mut response = Response::new();
    if !net.is_zero() {
        response = response.add_message(transfer_msg(
            &config.payout_token,
            &participant.wallet,
            net,
        )?);
    }
    if !fee.is_zero() {
        response = response.add_message(transfer_msg(
            &config.payout_token,
            &config.treasury_wallet,
            fee,
        )?);
    }

    Ok(response
        .add_attribute("method", "withdraw_matic_tokens")
        .add_attribute("index", index.to_string())
        .add_attribute("wallet", participant.wallet)
        .add_attribute("amount", gross)
        .add_attribute("fee", fee)
        .add_attribute("net", net)
        .add_attribute("deposit", deposit))
}

/************************************ Query *************************************/

pub fn query_wallet_registered(deps: Deps, wallet: String) -> StdResult<bool> {
    let wallet = deps.api.addr_validate(&wallet)?;
    Ok(WALLET_INDEX.has(deps.storage, &wallet))
}

pub fn query_participant_index(deps: Deps, wallet: String) -> StdResult<u64> {
    let wallet = deps.api.addr_validate(&wallet)?;
    WALLET_INDEX
        .may_load(deps.storage, &wallet)?
        .ok_or_else(|| {
            StdError::generic_err(
                ContractError::WalletNotRegistered {
                    wallet: wallet.to_string(),
                }
                .to_string(),
            )
        })
}

pub fn query_count(deps: Deps) -> StdResult<ParticipantsCountResponse> {
    let totals: Totals = TOTALS.load(deps.storage)?;
    Ok(ParticipantsCountResponse {
        count: totals.participant_count,
    })
}

pub fn query_participant(deps: Deps, index: u64) -> StdResult<GetParticipantResponse> {
    let data = PARTICIPANTS
        .may_load(deps.storage, index)?
        .ok_or_else(|| StdError::generic_err(ContractError::NotRegistered { index }.to_string()))?;
    Ok(GetParticipantResponse { index, data })
}

pub fn query_participants(deps: Deps, page: u64, limit: u64) -> StdResult<GetParticipantsResponse> {
    let totals: Totals = TOTALS.load(deps.storage)?;
    let limit = limit.min(MAX_LIMIT as u64);

    let start = page.saturating_mul(limit).min(totals.participant_count);
    let end = start.saturating_add(limit).min(totals.participant_count);

    let participants = PARTICIPANTS
        .range(
            deps.storage,
            Some(Bound::inclusive(start)),
            Some(Bound::exclusive(end)),
            Order::Ascending,
        )
        .map(|item| item.map(|(_, participant)| participant))
        .collect::<StdResult<Vec<Participant>>>()?;

    Ok(GetParticipantsResponse { participants })
}

pub fn query_all_participants(deps: Deps) -> StdResult<GetParticipantsResponse> {
    let participants = PARTICIPANTS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, participant)| participant))
        .collect::<StdResult<Vec<Participant>>>()?;

    Ok(GetParticipantsResponse { participants })
}
