use gitcmd::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  let mut cmd = command!("clone", "https://example.com/repo.git", "repo"; "depth" => "1", "q" => true);
  cmd.set_directory("/tmp");
  let r = PosixRenderer { program: "git".into(), quote: QuotePolicy::Loose };
  if let Some(res) = dispatch(&Planner { renderer: &r }, &cmd)? {
    println!("{}", res.stdout);
  }
  println!("{:?}", cmd.command_line().into_args());
  Ok(())
}
