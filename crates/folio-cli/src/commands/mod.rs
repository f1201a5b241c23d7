pub mod contact;
pub mod resume;
pub mod run;
pub mod serve;
