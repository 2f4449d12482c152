use bot_config_gen::models::BotSecrets;

fn main() {
    println!("Generating API server credentials for a single bot...\n");

    let secrets = BotSecrets::generate();

    println!("jwt_secret_key ({} hex chars):", secrets.jwt_secret_key.len());
    println!("{}", secrets.jwt_secret_key);
    println!("\nws_token ({} chars):", secrets.ws_token.len());
    println!("{}", secrets.ws_token);

    println!("\nPaste these into the bot's api_server section.");

    println!("\n⚠️  SECURITY WARNING:");
    println!("- Never commit generated config files");
    println!("- Rotating jwt_secret_key logs out every API client of that bot");
    println!("- The api_server.password written by bot-config-gen is predictable; set a real one");
}
