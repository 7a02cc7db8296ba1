mod class;
mod payment;
mod selection;
mod user;
