//! Command line surface of the `charforge` binary.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};

use charforge_domain::CharacterId;
use charforge_shared::{BuildPlan, ErrorCode, PlanReport, ResponseResult};

use crate::app::App;
use crate::use_cases::{CharacterSheetError, CreationError};

pub const USAGE: &str = "\
usage: charforge <command>

commands:
  derive <plan.json>   run a build plan and print the derived sheet
  save <plan.json>     run a build plan, save the character and print the sheet
  show <character-id>  print the sheet of a stored character
  list                 list stored characters
  delete <character-id>
  shop                 list shop items";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Derive(PathBuf),
    Save(PathBuf),
    Show(CharacterId),
    List,
    Delete(CharacterId),
    Shop,
}

impl Command {
    /// Parse the arguments after the program name.
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            ["derive", path] => Ok(Self::Derive(PathBuf::from(path))),
            ["save", path] => Ok(Self::Save(PathBuf::from(path))),
            ["show", id] => Ok(Self::Show(parse_character_id(id)?)),
            ["list"] => Ok(Self::List),
            ["delete", id] => Ok(Self::Delete(parse_character_id(id)?)),
            ["shop"] => Ok(Self::Shop),
            [] => bail!("missing command\n\n{}", USAGE),
            [other, ..] => bail!("unknown command or arguments: {}\n\n{}", other, USAGE),
        }
    }
}

fn parse_character_id(raw: &str) -> anyhow::Result<CharacterId> {
    let id: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid character id: {}", raw))?;
    Ok(CharacterId::new(id))
}

/// Run one command against a composed application.
///
/// Failures the user can fix (a bad plan, an unknown id) come back as an
/// error envelope; infrastructure failures are returned as errors.
pub async fn run(app: &App, command: Command) -> anyhow::Result<ResponseResult> {
    match command {
        Command::Derive(path) => run_plan(app, &path, false).await,
        Command::Save(path) => run_plan(app, &path, true).await,
        Command::Show(id) => match app.use_cases.character_sheet.view(id).await {
            Ok(view) => Ok(ResponseResult::success(view)),
            Err(e) => sheet_error(e),
        },
        Command::List => {
            let summaries = app
                .use_cases
                .character_sheet
                .list()
                .await
                .context("listing characters")?;
            Ok(ResponseResult::success(summaries))
        }
        Command::Delete(id) => match app.use_cases.character_sheet.delete(id).await {
            Ok(()) => Ok(ResponseResult::success_empty()),
            Err(e) => sheet_error(e),
        },
        Command::Shop => {
            let items = app.use_cases.shop.list().await.context("listing shop items")?;
            Ok(ResponseResult::success(items))
        }
    }
}

async fn run_plan(app: &App, path: &Path, persist: bool) -> anyhow::Result<ResponseResult> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading build plan {}", path.display()))?;
    let plan = match BuildPlan::from_json(&raw) {
        Ok(plan) => plan,
        Err(e) => {
            return Ok(ResponseResult::error(
                ErrorCode::BadRequest,
                format!("invalid build plan: {}", e),
            ))
        }
    };

    let mut creation = app.creation();
    let rejected = match creation.apply_plan(&plan) {
        Ok(rejected) => rejected,
        Err(e) => return creation_error(e),
    };
    let sheet = serde_json::to_value(creation.sheet()).context("serializing sheet")?;

    let character_id = if persist {
        match creation.save().await {
            Ok(record) => Some(record.id),
            Err(e) => return creation_error(e),
        }
    } else {
        None
    };

    Ok(ResponseResult::success(PlanReport {
        character_id,
        sheet,
        rejected,
    }))
}

fn creation_error(err: CreationError) -> anyhow::Result<ResponseResult> {
    match err {
        CreationError::Domain(e) => Ok(ResponseResult::error(
            ErrorCode::ValidationError,
            e.to_string(),
        )),
        CreationError::Repo(e) => Err(e).context("saving character"),
    }
}

fn sheet_error(err: CharacterSheetError) -> anyhow::Result<ResponseResult> {
    match err {
        CharacterSheetError::CharacterNotFound(id) => Ok(ResponseResult::error(
            ErrorCode::NotFound,
            format!("character {} not found", id),
        )),
        CharacterSheetError::Domain(e) => Ok(ResponseResult::error(
            ErrorCode::ValidationError,
            e.to_string(),
        )),
        CharacterSheetError::Repo(e) => Err(e).context("reading character"),
    }
}
