mod cors;
mod health_check;
mod helpers;
