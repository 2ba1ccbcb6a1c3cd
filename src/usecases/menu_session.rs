//! Menu Session - The Interactive Menu Loop
//!
//! One state (the menu) and one transition per numbered choice:
//! - show the menu, read a choice
//! - run the matching roster operation, prompting for its fields
//! - report the outcome, optionally wait for Enter
//!
//! Recoverable failures (bad date, lookup miss, storage error) are
//! reported and the loop continues. A malformed number re-prompts,
//! or ends the session when `reprompt_on_invalid_input` is off.
//! End of input anywhere ends the session cleanly.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, info, instrument, warn};

use crate::adapters::console::{CHOICE_PROMPT, MenuChoice, Prompter, menu_text, render_rows};
use crate::config::MenuConfig;
use crate::domain::{FeeRecord, Member, MemberCount, RosterError, parse_integer};
use crate::ports::RosterRepository;
use crate::usecases::roster_service::RosterService;

/// What the loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
  Continue,
  Exit,
}

/// Unwrap an answer, ending the session at end of input.
macro_rules! answer_or_exit {
  ($answer:expr) => {
    match $answer {
      Some(value) => value,
      None => return Ok(Step::Exit),
    }
  };
}

/// Drives the menu over a prompter until exit or end of input.
pub struct MenuSession<R, I, O>
where
  R: RosterRepository,
{
  /// Roster operations.
  service: RosterService<R>,
  /// Console input/output.
  prompter: Prompter<I, O>,
  /// Menu behavior switches.
  config: MenuConfig,
  /// Name used in the banner and farewell.
  app_name: String,
}

impl<R, I, O> MenuSession<R, I, O>
where
  R: RosterRepository,
  I: AsyncBufRead + Unpin,
  O: AsyncWrite + Unpin,
{
  /// Create a new session.
  pub fn new(
    service: RosterService<R>,
    prompter: Prompter<I, O>,
    config: MenuConfig,
    app_name: impl Into<String>,
  ) -> Self {
    Self {
      service,
      prompter,
      config,
      app_name: app_name.into(),
    }
  }

  /// Run until the user exits or input ends.
  ///
  /// # Errors
  /// Console I/O failures, and a malformed number when
  /// re-prompting is disabled.
  #[instrument(skip(self), fields(app = %self.app_name))]
  pub async fn run(&mut self) -> Result<()> {
    self
      .prompter
      .say(&format!("Welcome to the {}!", self.app_name))
      .await?;

    loop {
      self.prompter.write(&menu_text()).await?;
      let Some(input) = self.prompter.ask(CHOICE_PROMPT).await? else {
        info!("End of input, leaving menu");
        return Ok(());
      };

      let Some(choice) = MenuChoice::parse(&input) else {
        self.prompter.say("Invalid choice. Please try again.").await?;
        continue;
      };

      let step = match self.dispatch(choice).await {
        Ok(step) => step,
        Err(e) => self.recover(e).await?,
      };

      if step == Step::Exit {
        return Ok(());
      }

      if choice.pauses()
        && self.config.pause_after_action
        && self.prompter.ask("press enter to continue").await?.is_none()
      {
        return Ok(());
      }
    }
  }

  /// Consume the session, returning its prompter.
  pub fn into_prompter(self) -> Prompter<I, O> {
    self.prompter
  }

  /// Report a recoverable error; pass anything else up.
  async fn recover(&mut self, err: anyhow::Error) -> Result<Step> {
    match err.downcast_ref::<RosterError>() {
      Some(RosterError::Parse { .. }) | None => Err(err),
      Some(e @ RosterError::Storage(_)) => {
        error!(error = %e, "Roster operation failed");
        self.prompter.say(&e.to_string()).await?;
        Ok(Step::Continue)
      }
      Some(e) => {
        self.prompter.say(&e.to_string()).await?;
        Ok(Step::Continue)
      }
    }
  }

  #[instrument(skip(self))]
  async fn dispatch(&mut self, choice: MenuChoice) -> Result<Step> {
    match choice {
      MenuChoice::AddMember => self.add_member().await,
      MenuChoice::ListMembers => self.list_members().await,
      MenuChoice::AddFeeRecord => self.add_fee_record().await,
      MenuChoice::ListFeeRecords => self.list_fee_records().await,
      MenuChoice::FindMemberByName => self.find_member().await,
      MenuChoice::ChangeFeesById => self.change_fees().await,
      MenuChoice::ResetAllFees => self.reset_fees().await,
      MenuChoice::SaveMemberCount => self.save_member_count().await,
      MenuChoice::ShowMembersGraph => self.show_graph().await,
      MenuChoice::ChangeMembershipType => self.change_membership_type().await,
      MenuChoice::Exit => self.confirm_exit().await,
    }
  }

  async fn add_member(&mut self) -> Result<Step> {
    let member_id = answer_or_exit!(self.ask_integer("Enter Member ID: ", "Member ID").await?);
    let name = answer_or_exit!(self.prompter.ask("Enter Name: ").await?);
    let age = answer_or_exit!(self.ask_integer("Enter Age: ", "Age").await?);
    let mobile = answer_or_exit!(self.prompter.ask("Enter Mobile Number: ").await?);
    let membership_type = answer_or_exit!(self.prompter.ask("Enter Membership Type: ").await?);

    self
      .service
      .add_member(Member::new(member_id, name, age, mobile, membership_type))
      .await?;
    self.prompter.say("Member added successfully!").await?;
    Ok(Step::Continue)
  }

  async fn list_members(&mut self) -> Result<Step> {
    self.prompter.say("\nAll Members:").await?;
    let table = self.service.members().await?;
    if table.is_empty() {
      self.prompter.say("No members found.").await?;
    } else {
      self.prompter.write(&render_rows(table.rows())).await?;
    }
    Ok(Step::Continue)
  }

  async fn add_fee_record(&mut self) -> Result<Step> {
    let id = answer_or_exit!(self.ask_integer("Enter Member ID: ", "Member ID").await?);
    let name = answer_or_exit!(self.prompter.ask("Enter Name: ").await?);
    let fees_paid = answer_or_exit!(self.prompter.ask("Enter Fees Paid: ").await?);

    self
      .service
      .add_fees_record(FeeRecord::new(id, name, fees_paid))
      .await?;
    self
      .prompter
      .say("Fees payment record added successfully!")
      .await?;
    Ok(Step::Continue)
  }

  async fn list_fee_records(&mut self) -> Result<Step> {
    self.prompter.say("\nFees Payment Records:").await?;
    let table = self.service.fee_records().await?;
    if table.is_empty() {
      self.prompter.say("No fees records found.").await?;
    } else {
      self.prompter.write(&render_rows(table.rows())).await?;
    }
    Ok(Step::Continue)
  }

  async fn find_member(&mut self) -> Result<Step> {
    let query = answer_or_exit!(self.prompter.ask("Enter the name to search for: ").await?);

    self.prompter.say("\nSearch Results:").await?;
    let matches = self.service.find_member_by_name(&query).await?;
    if matches.is_empty() {
      self.prompter.say("Member not found.").await?;
    } else {
      self.prompter.write(&render_rows(matches.as_slice())).await?;
    }
    Ok(Step::Continue)
  }

  async fn change_fees(&mut self) -> Result<Step> {
    let id = answer_or_exit!(self.ask_integer("Enter Member ID: ", "Member ID").await?);
    let fees_paid = answer_or_exit!(self.prompter.ask("Enter new Fees Paid: ").await?);

    if self.service.change_fees_by_id(id, &fees_paid).await? == 0 {
      self
        .prompter
        .say(&format!("No fees record found for ID {id}."))
        .await?;
    } else {
      self.prompter.say("Fees updated successfully!").await?;
    }
    Ok(Step::Continue)
  }

  async fn reset_fees(&mut self) -> Result<Step> {
    self.service.set_all_fees_to_no().await?;
    self
      .prompter
      .say("All fees set to 'no' successfully!")
      .await?;
    Ok(Step::Continue)
  }

  async fn save_member_count(&mut self) -> Result<Step> {
    let date_text = answer_or_exit!(self.prompter.ask("Enter the date (YYYY-MM-DD): ").await?);
    // Reject the date before asking for the count.
    let date = MemberCount::parse_date(&date_text)?;
    let count = answer_or_exit!(
      self
        .ask_integer("Enter the member count: ", "member count")
        .await?
    );

    self
      .service
      .record_member_count(MemberCount::new(date, count))
      .await?;
    self
      .prompter
      .say("Member count and date saved successfully!")
      .await?;
    Ok(Step::Continue)
  }

  async fn show_graph(&mut self) -> Result<Step> {
    match self.service.create_members_graph().await? {
      Some(chart) => self.prompter.write(&chart).await?,
      None => {
        self
          .prompter
          .say("No member count data available. Please save member count first.")
          .await?;
      }
    }
    Ok(Step::Continue)
  }

  async fn change_membership_type(&mut self) -> Result<Step> {
    let member_id = answer_or_exit!(self.ask_integer("Enter Member ID: ", "Member ID").await?);
    let membership_type =
      answer_or_exit!(self.prompter.ask("Enter new Membership Type: ").await?);

    if self
      .service
      .change_membership_type_by_id(member_id, &membership_type)
      .await?
      == 0
    {
      self
        .prompter
        .say(&format!("No member found with ID {member_id}."))
        .await?;
    } else {
      self
        .prompter
        .say("Membership type updated successfully!")
        .await?;
    }
    Ok(Step::Continue)
  }

  async fn confirm_exit(&mut self) -> Result<Step> {
    let answer = answer_or_exit!(
      self
        .prompter
        .ask("Are you sure you want to exit (y/n): ")
        .await?
    );

    if answer.trim().eq_ignore_ascii_case("y") {
      self
        .prompter
        .say(&format!("Exiting {}. Goodbye!", self.app_name))
        .await?;
      return Ok(Step::Exit);
    }
    Ok(Step::Continue)
  }

  /// Prompt for a whole number.
  ///
  /// Re-prompts on malformed input unless configured to fail, in
  /// which case `RosterError::Parse` is returned.
  async fn ask_integer(&mut self, prompt: &str, field: &'static str) -> Result<Option<i64>> {
    loop {
      let Some(text) = self.prompter.ask(prompt).await? else {
        return Ok(None);
      };

      match parse_integer(field, &text) {
        Ok(value) => return Ok(Some(value)),
        Err(e) if self.config.reprompt_on_invalid_input => {
          warn!(field, "Malformed number entered");
          self.prompter.say(&e.to_string()).await?;
        }
        Err(e) => return Err(e.into()),
      }
    }
  }
}
