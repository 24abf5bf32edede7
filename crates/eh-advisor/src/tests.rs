use crate::*;
use crate::template::{placeholders, render, TemplateVars};
use eh_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn heavy_profile() -> Profile {
    Profile {
        heating_hours: Some(HeatingHours::NinePlus),
        hot_water_usage: Some(HotWaterUsage::High),
        cooking_habits: Some(CookingHabits::HeavyElectric),
        lighting_type: Some(LightingType::MostlyOld),
        appliance_usage_age: Some(ApplianceUsage::OldHeavyUse),
        extra_notes: String::new(),
    }
}

// ========== Rule Order ==========

#[test]
fn test_rule_table_order() {
    let order: Vec<Intent> = INTENT_RULES.iter().map(|r| r.intent).collect();
    assert_eq!(
        order,
        vec![
            Intent::Greeting,
            Intent::Gratitude,
            Intent::SmallTalk,
            Intent::Capabilities,
            Intent::SmartThermostat,
            Intent::HeatingCost,
            Intent::BoilerReplacement,
            Intent::Heating,
            Intent::HotWater,
            Intent::Grants,
            Intent::Solar,
            Intent::Appliances,
            Intent::Lighting,
            Intent::Insulation,
            Intent::Bills,
            Intent::SaveEnergy,
            Intent::Tips,
        ]
    );
}

#[test]
fn test_greeting_beats_heating() {
    assert_eq!(match_intent("hi, what about my heating bill"), Intent::Greeting);
}

#[test]
fn test_boiler_replace_sub_branch() {
    assert_eq!(match_intent("my boiler is 20 years old, should I replace it"), Intent::BoilerReplacement);
}

#[test]
fn test_gratitude_beats_heating() {
    assert_eq!(match_intent("thanks, tell me more about heating"), Intent::Gratitude);
}

#[test]
fn test_heating_beats_hot_water() {
    assert_eq!(match_intent("hot water heating"), Intent::Heating);
}

// ========== Intent Matching ==========

#[test]
fn test_greetings() {
    assert_eq!(match_intent("Hello"), Intent::Greeting);
    assert_eq!(match_intent("good morning!"), Intent::Greeting);
    assert_eq!(match_intent("  HEY  "), Intent::Greeting);
}

#[test]
fn test_greeting_needs_word_boundary() {
    assert_ne!(match_intent("high bills every month"), Intent::Greeting);
    assert_eq!(match_intent("high bills every month"), Intent::Bills);
}

#[test]
fn test_gratitude() {
    assert_eq!(match_intent("thanks so much"), Intent::Gratitude);
    assert_eq!(match_intent("thank you"), Intent::Gratitude);
    assert_eq!(match_intent("that was helpful"), Intent::Gratitude);
    assert_eq!(match_intent("ta!"), Intent::Gratitude);
}

#[test]
fn test_ta_inside_words_is_not_gratitude() {
    assert_eq!(match_intent("what tariff should I pick"), Intent::Bills);
}

#[test]
fn test_gratitude_tokens_inside_words() {
    assert_eq!(match_intent("thankyou so much"), Intent::Gratitude);
    assert_eq!(match_intent("i'm thankful"), Intent::Gratitude);
    assert_eq!(match_intent("unhelpful answer"), Intent::Gratitude);
    assert_eq!(match_intent("really appreciates it"), Intent::Gratitude);
    assert_eq!(match_intent("what tariff should I pick"), Intent::Bills);
}

#[test]
fn test_small_talk_and_capabilities() {
    assert_eq!(match_intent("how are you doing"), Intent::SmallTalk);
    assert_eq!(match_intent("what's up"), Intent::SmallTalk);
    assert_eq!(match_intent("what can you do"), Intent::Capabilities);
    assert_eq!(match_intent("can you help me"), Intent::Capabilities);
}

#[test]
fn test_heating_branches() {
    assert_eq!(match_intent("should I get a smart thermostat like nest"), Intent::SmartThermostat);
    assert_eq!(match_intent("how do I reduce my heating costs"), Intent::HeatingCost);
    assert_eq!(match_intent("tell me about radiators"), Intent::Heating);
    assert_eq!(match_intent("my house never feels warm"), Intent::Heating);
}

#[test]
fn test_topic_intents() {
    assert_eq!(match_intent("long showers"), Intent::HotWater);
    assert_eq!(match_intent("are there any grants available"), Intent::Grants);
    assert_eq!(match_intent("are solar panels worth it"), Intent::Solar);
    assert_eq!(match_intent("is my fridge too old"), Intent::Appliances);
    assert_eq!(match_intent("which led bulbs"), Intent::Lighting);
    assert_eq!(match_intent("my loft insulation"), Intent::Insulation);
    assert_eq!(match_intent("my bills are too expensive"), Intent::Bills);
    assert_eq!(match_intent("how can I save energy"), Intent::SaveEnergy);
    assert_eq!(match_intent("any tips?"), Intent::Tips);
}

#[test]
fn test_menu_fallback() {
    assert_eq!(match_intent("xyzzy"), Intent::Menu);
    assert_eq!(match_intent(""), Intent::Menu);
    assert_eq!(match_intent("   "), Intent::Menu);
}

#[test]
fn test_matcher_all_of() {
    let m = Matcher::AllOf(vec![Matcher::AnyOf(&["heat"]), Matcher::AnyOf(&["nest"])]);
    assert!(m.matches("nest heating"));
    assert!(!m.matches("heating"));
}

// ========== Responses ==========

#[test]
fn test_greeting_interpolates_profile() {
    let reply = respond_with_intent("hi", &heavy_profile());
    assert_eq!(reply.intent, Intent::Greeting);
    assert!(reply.content.contains("• Heating: 9+ hours per day\n"));
    assert!(reply.content.contains("• Hot water: High (6+ uses per day)\n"));
    assert!(reply.content.contains("**Your profile shows:**"));
}

#[test]
fn test_unset_fields_render_not_provided() {
    let text = respond("hello", &Profile::new());
    assert!(text.contains("• Heating: Not provided\n"));
    assert!(text.contains("• Lighting: Not provided\n"));
}

#[test]
fn test_smart_thermostat_mentions_heating_label() {
    let text = respond("is a smart thermostat worth it", &heavy_profile());
    assert!(text.contains("Based on your heating usage (9+ hours per day)"));
}

#[test]
fn test_bills_conditional_lines() {
    let heavy = respond("my bills are too expensive", &heavy_profile());
    assert!(heavy.contains("• Heating is your biggest opportunity - see my heating tips!"));
    assert!(heavy.contains("• LED switch could save £150+/year"));
    assert!(heavy.contains("• Old appliances may be costing you £100+/year extra"));

    let empty = respond("my bills are too expensive", &Profile::new());
    assert!(!empty.contains("biggest opportunity"));
    assert!(!empty.contains("LED switch"));
    assert!(empty.contains("**Based on your profile:**\n\n\n\n\n**If struggling to pay:**"));
}

#[test]
fn test_save_energy_plan() {
    let heavy = respond("how can I save energy", &heavy_profile());
    assert!(heavy.contains("You heat for 9+ hours per day"));
    assert!(heavy.contains("Your usage: High (6+ uses per day)"));
    assert!(heavy.contains("Status: Mostly older appliances (10+ years)"));
    assert!(heavy.contains("Type: Mostly older bulbs (halogen/incandescent)"));

    let empty = respond("how can I save energy", &Profile::new());
    assert!(empty.contains("Heating info not provided"));
    assert!(empty.contains("Usage not specified"));
    assert!(empty.contains("Status not specified"));
    assert!(empty.contains("Type not specified"));
}

#[test]
fn test_tips_personalised() {
    let heavy = respond("any tips?", &heavy_profile());
    assert!(heavy.contains("1. Reduce heating by 1 hour → £60-80/year"));
    assert!(heavy.contains("2. Shorter showers → £45/person/year"));
    assert!(heavy.contains("3. Replace most-used bulbs with LED first"));

    let empty = respond("any tips?", &Profile::new());
    assert!(empty.contains("1. Turn thermostat down 1°C → £80-100/year"));
    assert!(empty.contains("2. Fix any dripping taps → £18/tap/year"));
    assert!(empty.contains("3. Turn off lights when leaving rooms"));
}

#[test]
fn test_menu_restates_profile() {
    let reply = respond_with_intent("xyzzy", &heavy_profile());
    assert_eq!(reply.intent, Intent::Menu);
    assert!(reply.content.starts_with("Great question!"));
    assert!(reply.content.contains("• Cooking: 2–3+ cooked meals (electric hob/oven)\n"));
    assert!(reply.content.contains("• Appliances: Mostly older appliances (10+ years)\n"));
    assert!(reply.content.contains("\"How can I reduce my heating bill?\""));
}

#[test]
fn test_every_template_fully_bound() {
    let vars = profile_vars(&Profile::new());
    let templates = INTENT_RULES.iter().map(|r| r.template).chain(std::iter::once(responses::MENU));
    for template in templates {
        for name in placeholders(template) {
            assert!(vars.get(name).is_some(), "unbound placeholder {name}");
        }
        assert!(!render(template, &vars).contains('{'));
    }
}

#[test]
fn test_respond_idempotent() {
    let p = heavy_profile();
    for text in ["hi", "my boiler is 20 years old, should I replace it", "xyzzy", "what grants can I get"] {
        assert_eq!(respond(text, &p), respond(text, &p));
    }
}

// ========== Template ==========

#[test]
fn test_render_substitutes_and_keeps_unknown() {
    let vars = TemplateVars::new().with("name", "Ada");
    assert_eq!(render("Hi {name}, {unknown}!", &vars), "Hi Ada, {unknown}!");
    assert_eq!(render("no placeholders", &vars), "no placeholders");
}

#[test]
fn test_placeholders_in_order() {
    assert_eq!(placeholders("{a} then {b_c} then {a}"), vec!["a", "b_c", "a"]);
}

// ========== Chat Session ==========

#[test]
fn test_session_starts_with_welcome() {
    let s = ChatSession::new();
    assert_eq!(s.len(), 1);
    assert_eq!(s.messages()[0].role, Role::Assistant);
    assert_eq!(s.messages()[0].content, responses::WELCOME);
    assert!(!s.is_typing());
}

#[test]
fn test_session_rejects_empty() {
    let mut s = ChatSession::new();
    assert!(matches!(s.submit("   "), Err(EhError::EmptyMessage)));
    assert_eq!(s.len(), 1);
}

#[test]
fn test_session_turn() {
    let mut s = ChatSession::new();
    let pending = s.submit("  hello  ").unwrap();
    assert_eq!(pending.text, "hello");
    assert!(s.is_typing());
    assert_eq!(s.last().unwrap().role, Role::User);
    assert!(s.complete(&pending, "hi there"));
    assert_eq!(s.len(), 3);
    assert_eq!(s.last().unwrap().content, "hi there");
    assert!(!s.is_typing());
}

#[test]
fn test_typing_until_last_overlapping_reply() {
    let mut s = ChatSession::new();
    let first = s.submit("hello").unwrap();
    let second = s.submit("any tips?").unwrap();
    assert!(s.complete(&first, "hi"));
    assert!(s.is_typing());
    assert!(s.complete(&second, "tips"));
    assert!(!s.is_typing());
}

#[test]
fn test_restart_clears_typing() {
    let mut s = ChatSession::new();
    let stale = s.submit("hello").unwrap();
    s.submit("hello again").unwrap();
    s.restart();
    assert!(!s.is_typing());
    assert!(!s.complete(&stale, "late"));
    assert!(!s.is_typing());
}

#[test]
fn test_restart_drops_stale_reply() {
    let mut s = ChatSession::new();
    let pending = s.submit("hello").unwrap();
    s.restart();
    assert_eq!(s.generation(), 1);
    assert!(!s.complete(&pending, "late reply"));
    assert_eq!(s.len(), 1);
    assert_eq!(s.messages()[0].content, responses::WELCOME);
}

#[test]
fn test_role_serde() {
    let m = ChatMessage::user("hi");
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["role"], "user");
    assert_eq!(Role::Assistant.to_string(), "assistant");
}

// ========== Delay ==========

#[test]
fn test_delay_sample_bounds() {
    let d = ThinkingDelay::default();
    assert_eq!(d.base, Duration::from_millis(800));
    assert_eq!(d.max(), Duration::from_millis(1500));
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let s = d.sample(&mut rng);
        assert!(s >= d.base && s <= d.max());
    }
}

#[test]
fn test_delay_none() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(ThinkingDelay::none().sample(&mut rng), Duration::ZERO);
}

// ========== Advisor ==========

#[tokio::test]
async fn test_converse_instant() {
    let session = Mutex::new(ChatSession::new());
    let reply = Advisor::instant().converse(&session, &heavy_profile(), "any tips?").await.unwrap();
    assert_eq!(reply.intent, Intent::Tips);
    let s = session.lock().unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.last().unwrap().content, reply.content);
}

#[tokio::test]
async fn test_converse_empty_appends_nothing() {
    let session = Mutex::new(ChatSession::new());
    let err = Advisor::instant().converse(&session, &Profile::new(), "  ").await.unwrap_err();
    assert!(matches!(err, EhError::EmptyMessage));
    assert_eq!(session.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_converse_waits_for_delay() {
    let session = Mutex::new(ChatSession::new());
    let advisor = Advisor::from_config(&config::AdvisorConfig::default());
    let start = tokio::time::Instant::now();
    advisor.converse(&session, &Profile::new(), "hello").await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(800));
    assert!(elapsed <= Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_restart_while_pending() {
    let session = Arc::new(Mutex::new(ChatSession::new()));
    let advisor = Advisor::default();
    let task = {
        let session = session.clone();
        tokio::spawn(async move { advisor.converse(&session, &Profile::new(), "hello").await })
    };
    while session.lock().unwrap().len() < 2 {
        tokio::task::yield_now().await;
    }
    session.lock().unwrap().restart();

    let result = task.await.unwrap();
    assert!(matches!(result, Err(EhError::SessionRestarted { .. })));
    let s = session.lock().unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s.messages()[0].content, responses::WELCOME);
}
