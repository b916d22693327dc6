use actix_web::web;

pub mod media;
pub mod pages;
pub mod public;
pub mod publish;
pub mod sections;
pub mod sites;
pub mod themes;

pub fn configure(cfg: &mut web::ServiceConfig) {
    sites::configure(cfg);
    themes::configure(cfg);
    pages::configure(cfg);
    sections::configure(cfg);
    publish::configure(cfg);
    public::configure(cfg);
    media::configure(cfg);
}
