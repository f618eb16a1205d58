use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use campaign::msg::{
    AdminsResponse, ConfigResponse, Cw20HookMsg, ExecuteMsg, GetParticipantResponse,
    GetParticipantsResponse, InstantiateMsg, MigrateMsg, ParticipantsCountResponse, QueryMsg,
    TotalsResponse,
};
use campaign::state::{CampaignState, Participant};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(Cw20HookMsg), &out_dir);
    export_schema(&schema_for!(CampaignState), &out_dir);
    export_schema(&schema_for!(Participant), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
    export_schema(&schema_for!(AdminsResponse), &out_dir);
    export_schema(&schema_for!(ParticipantsCountResponse), &out_dir);
    export_schema(&schema_for!(GetParticipantResponse), &out_dir);
    export_schema(&schema_for!(GetParticipantsResponse), &out_dir);
    export_schema(&schema_for!(TotalsResponse), &out_dir);
}
