mod config;
mod server;

use actix_web::{web, App, HttpServer};
use breeze::{
    core::session::SessionManager,
    llm::providers::openai::{OpenAI, OpenAIModel},
    AssistantAgent, WeatherClient, WeatherLookupTool,
};
use clap::Parser;
use config::Config;
use std::sync::Arc;

const AGENT_NAME: &str = "Weather Assistant";

const INSTRUCTIONS: &str = "You are a weather assistant that provides current weather information.

   When asked about the weather, use the get_weather tool to fetch accurate data.
   If the user doesn't specify a country code and ambiguity exists,
   ask for clarification (e.g., Paris, France vs. Paris, Texas).

   In addition to weather details, always generate friendly commentary,
   including clothing suggestions or activity recommendations based on conditions.
   ";

#[derive(Parser, Debug)]
#[command(name = "breeze-chat-server", about = "Conversational weather assistant")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn build_agent(config: &Config) -> AssistantAgent<OpenAI> {
    let llm = OpenAI::new()
        .set_base_url(config.llm_base_url.clone())
        .set_api_key(config.gemini_api_key.clone())
        .set_model(OpenAIModel::Gemini20Flash);

    let weather_client = WeatherClient::new(config.weather_api_key.clone())
        .set_base_url(config.weather_base_url.clone());

    AssistantAgent::new(AGENT_NAME, INSTRUCTIONS, Arc::new(llm))
        .with_tool(Box::new(WeatherLookupTool::new(weather_client)))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Missing secrets abort here, before any session can be accepted.
    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let manager = web::Data::new(SessionManager::new(build_agent(&config)));

    log::info!("listening on http://{}:{}", args.host, args.port);
    HttpServer::new(move || {
        App::new()
            .app_data(manager.clone())
            .configure(server::configure::<OpenAI>)
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await
}
