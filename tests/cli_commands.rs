mod common;

use common::TestContext;
use predicates::prelude::*;

const IDEA: &str = "Quero criar um curso sobre finanças pessoais para jovens...";

fn compose_args<'a>(idea: &'a str, persona: &'a str, goal: &'a str) -> Vec<&'a str> {
    vec!["compose", "--idea", idea, "--persona", persona, "--goal", goal]
}

#[test]
fn compose_prints_meta_prompt() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(compose_args(IDEA, "copywriter", "article"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Copywriter Senior\""))
        .stdout(predicate::str::contains("\"Artigo / Blog Post\""))
        .stdout(predicate::str::contains("6. Idioma de Saída: \"Português (Brasil)\""));
}

#[test]
fn compose_alias_and_detail_flags() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["c", "-i", IDEA, "-p", "chef", "-g", "story"])
        .args(["--audience", "Estudantes", "--tone", "Irônico", "--language", "Español"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Chef de Cozinha\""))
        .stdout(predicate::str::contains("4. Público Alvo: \"Estudantes\""))
        .stdout(predicate::str::contains("5. Tom de Voz: \"Irônico\""))
        .stdout(predicate::str::contains("\"Español\""));
}

#[test]
fn compose_output_is_deterministic() {
    let ctx = TestContext::new();

    let first = ctx.cli().args(compose_args(IDEA, "developer", "code")).output().unwrap();
    let second = ctx.cli().args(compose_args(IDEA, "developer", "code")).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn compose_rejects_short_idea() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(compose_args("abcd", "copywriter", "article"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: "))
        .stderr(predicate::str::contains("pelo menos 5 caracteres"));
}

#[test]
fn compose_rejects_unknown_persona() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(compose_args(IDEA, "astronaut", "article"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Persona 'astronaut' not found"));
}

#[test]
fn compose_rejects_unknown_goal() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(compose_args(IDEA, "copywriter", "poem"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal 'poem' not found"));
}

#[test]
fn catalog_lists_choices() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("copywriter"))
        .stdout(predicate::str::contains("Cientista de Dados"))
        .stdout(predicate::str::contains("landing_page"))
        .stdout(predicate::str::contains("Urgente e Direto"))
        .stdout(predicate::str::contains("Français"));
}

#[test]
fn generate_without_api_key_fails_with_configuration_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--idea", IDEA, "--persona", "copywriter", "--goal", "article"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key not found"))
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn config_file_supplies_default_language() {
    let ctx = TestContext::new();
    ctx.write_file("promptmaster.toml", "[wizard]\ndefault_language = \"English (US)\"\n");

    ctx.cli()
        .args(compose_args(IDEA, "copywriter", "article"))
        .assert()
        .success()
        .stdout(predicate::str::contains("6. Idioma de Saída: \"English (US)\""));
}

#[test]
fn config_file_can_swap_the_template() {
    let ctx = TestContext::new();
    ctx.write_file("prompts/short.j2", "{{ persona.label }} / {{ goal.label }} / {{ tone }}\n");
    ctx.write_file("custom.toml", "[wizard]\ntemplate_path = \"prompts/short.j2\"\n");

    ctx.cli()
        .args(["--config", "custom.toml"])
        .args(compose_args(IDEA, "marketing", "email"))
        .args(["--tone", "Amigável e Casual"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "Estrategista de Marketing / E-mail Marketing / Amigável e Casual\n",
        ));
}

#[test]
fn template_with_unknown_variable_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_file("bad.j2", "{{ ideia }}");
    ctx.write_file("promptmaster.toml", "[wizard]\ntemplate_path = \"bad.j2\"\n");

    ctx.cli()
        .args(compose_args(IDEA, "copywriter", "article"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.j2"));
}

#[test]
fn unknown_config_key_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_file("promptmaster.toml", "[llm]\nmodle = \"typo\"\n");

    ctx.cli()
        .args(compose_args(IDEA, "copywriter", "article"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "nowhere.toml", "catalog"])
        .assert()
        .success();

    ctx.cli()
        .args(["--config", "nowhere.toml"])
        .args(compose_args(IDEA, "copywriter", "article"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found: nowhere.toml"));
}
