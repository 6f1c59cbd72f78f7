//! The `public` schema: application tables and RPC functions.
//!
//! Each table is a module holding `Row`, `Insert` and `Update`. Each
//! function is a module holding `Args` and naming its return type through
//! [`tutordb::FunctionShape`].

pub mod admin_actions;
pub mod answers;
pub mod chat_history;
pub mod chatbot_responses;
pub mod conversations;
pub mod curriculum_plans;
pub mod feedback;
pub mod homework_table;
pub mod knowledge_updates;
pub mod messages;
pub mod notifications;
pub mod performance_analytics;
pub mod practice_tests_table;
pub mod pt_backup;
pub mod qb_back_up;
pub mod question_bank_table;
pub mod question_types;
pub mod reminders;
pub mod session_summaries;
pub mod test_attempts_table;
pub mod usage_analytics;
pub mod user_messages;
pub mod user_progress;
pub mod user_question_progress;
pub mod user_settings;
pub mod users;

// Functions
pub mod execute_ddl;
pub mod get_table_info;
