mod scenarios;
mod tcp;
