use colored::Colorize;
use emr_client::{Client, ClientError, NewEncounter, NewPerson};

type CmdResult = Result<(), String>;

fn fail(e: ClientError) -> String {
    e.to_string()
}

// ── persons ─────────────────────────────────────────────────────

pub async fn person_search(client: &Client, query: &str) -> CmdResult {
    let persons = client.search_persons(query).await.map_err(fail)?;
    if persons.is_empty() {
        println!("{}", "No matching persons.".dimmed());
        return Ok(());
    }
    println!("{} {} match(es)\n", "Persons:".bold(), persons.len());
    for p in &persons {
        let birthdate = if p.birthdate.is_empty() { "—" } else { p.birthdate.as_str() };
        println!(
            "  {} {}  {} {}",
            "•".dimmed(),
            p.display.cyan(),
            p.gender.dimmed(),
            birthdate.dimmed()
        );
        println!("    {}", p.uuid.dimmed());
    }
    Ok(())
}

pub async fn person_create(
    client: &Client,
    given: &str,
    family: &str,
    gender: &str,
    birthdate: Option<&str>,
) -> CmdResult {
    let person = client
        .create_person(&NewPerson {
            given_name: given.to_string(),
            family_name: family.to_string(),
            gender: gender.to_string(),
            birthdate: birthdate.map(str::to_string),
        })
        .await
        .map_err(fail)?;
    println!("{} {}", "Created:".dimmed(), person.display.green());
    println!("{} {}", "UUID:   ".dimmed(), person.uuid.cyan());
    Ok(())
}

pub async fn person_delete(client: &Client, uuid: &str) -> CmdResult {
    client.delete_person(uuid).await.map_err(fail)?;
    println!("{} person {}", "Deleted".green(), uuid.dimmed());
    Ok(())
}

// ── attributes ──────────────────────────────────────────────────

pub async fn attribute_list(client: &Client, person: &str) -> CmdResult {
    let attrs = client.list_attributes(person).await.map_err(fail)?;
    if attrs.is_empty() {
        println!("{}", "No attributes.".dimmed());
        return Ok(());
    }
    println!("{} {} attribute(s)\n", "Attributes:".bold(), attrs.len());
    for a in &attrs {
        let label = if a.attribute_type.display.is_empty() {
            "(untyped)".dimmed()
        } else {
            a.attribute_type.display.cyan()
        };
        println!("  {} {} = {}", "•".dimmed(), label, a.value);
        println!("    {}", a.uuid.dimmed());
    }
    Ok(())
}

pub async fn attribute_add(client: &Client, person: &str, type_id: &str, value: &str) -> CmdResult {
    let attr = client
        .create_attribute(person, type_id, value)
        .await
        .map_err(fail)?;
    println!("{} {} = {}", "Added:".dimmed(), attr.attribute_type.display.cyan(), attr.value);
    println!("{} {}", "UUID: ".dimmed(), attr.uuid.dimmed());
    Ok(())
}

pub async fn attribute_set(client: &Client, person: &str, id: &str, value: &str) -> CmdResult {
    let attr = client
        .update_attribute(person, id, value)
        .await
        .map_err(fail)?;
    println!("{} {} = {}", "Updated:".dimmed(), attr.uuid.dimmed(), attr.value.green());
    Ok(())
}

pub async fn attribute_delete(client: &Client, person: &str, id: &str) -> CmdResult {
    client.delete_attribute(person, id).await.map_err(fail)?;
    println!("{} attribute {}", "Deleted".green(), id.dimmed());
    Ok(())
}

// ── encounters ──────────────────────────────────────────────────

pub async fn encounter_list(client: &Client, patient: &str) -> CmdResult {
    let encounters = client.list_encounters(patient).await.map_err(fail)?;
    if encounters.is_empty() {
        println!("{}", "No encounters.".dimmed());
        return Ok(());
    }
    println!("{} {} encounter(s)\n", "Encounters:".bold(), encounters.len());
    for e in &encounters {
        let kind = if e.encounter_type.display.is_empty() {
            "(untyped)".dimmed()
        } else {
            e.encounter_type.display.cyan()
        };
        println!("  {} {}  {}", "•".dimmed(), kind, e.encounter_datetime.dimmed());
        println!("    {}", e.uuid.dimmed());
    }
    Ok(())
}

pub async fn encounter_create(
    client: &Client,
    patient: &str,
    type_id: &str,
    datetime: &str,
) -> CmdResult {
    let enc = client
        .create_encounter(&NewEncounter {
            patient: patient.to_string(),
            encounter_type: type_id.to_string(),
            encounter_datetime: datetime.to_string(),
        })
        .await
        .map_err(fail)?;
    println!("{} {}", "Created:".dimmed(), enc.display.green());
    println!("{} {}", "UUID:   ".dimmed(), enc.uuid.cyan());
    Ok(())
}

pub async fn encounter_delete(client: &Client, uuid: &str) -> CmdResult {
    client.delete_encounter(uuid).await.map_err(fail)?;
    println!("{} encounter {}", "Deleted".green(), uuid.dimmed());
    Ok(())
}

// ── visit types ─────────────────────────────────────────────────

pub async fn visit_type_list(client: &Client) -> CmdResult {
    let types = client.list_visit_types().await.map_err(fail)?;
    if types.is_empty() {
        println!("{}", "No visit types configured.".dimmed());
        return Ok(());
    }
    println!("{} {} visit type(s)\n", "Visit types:".bold(), types.len());
    for vt in &types {
        println!("  {} {}", "•".dimmed(), vt.name.cyan());
        if !vt.description.is_empty() {
            println!("    {}", vt.description.dimmed());
        }
        println!("    {}", vt.uuid.dimmed());
    }
    Ok(())
}

pub async fn visit_type_create(client: &Client, name: &str, description: &str) -> CmdResult {
    let vt = client.create_visit_type(name, description).await.map_err(fail)?;
    println!("{} {}", "Created:".dimmed(), vt.name.green());
    println!("{} {}", "UUID:   ".dimmed(), vt.uuid.cyan());
    Ok(())
}

pub async fn visit_type_update(
    client: &Client,
    uuid: &str,
    name: &str,
    description: &str,
) -> CmdResult {
    let vt = client
        .update_visit_type(uuid, name, description)
        .await
        .map_err(fail)?;
    println!("{} {}", "Updated:".dimmed(), vt.name.green());
    Ok(())
}

pub async fn visit_type_retire(client: &Client, uuid: &str, reason: &str) -> CmdResult {
    client.retire_visit_type(uuid, reason).await.map_err(fail)?;
    println!("{} visit type {} ({})", "Retired".green(), uuid.dimmed(), reason.dimmed());
    Ok(())
}

// ── privileges & roles ──────────────────────────────────────────

pub async fn privilege_list(client: &Client) -> CmdResult {
    let privileges = client.list_privileges().await.map_err(fail)?;
    if privileges.is_empty() {
        println!("{}", "No privileges.".dimmed());
        return Ok(());
    }
    println!("{} {} privilege(s)\n", "Privileges:".bold(), privileges.len());
    for p in &privileges {
        println!("  {} {}", "•".dimmed(), p.display.cyan());
        if !p.description.is_empty() {
            println!("    {}", p.description.dimmed());
        }
    }
    Ok(())
}

pub async fn role_list(client: &Client) -> CmdResult {
    let roles = client.list_roles().await.map_err(fail)?;
    if roles.is_empty() {
        println!("{}", "No roles.".dimmed());
        return Ok(());
    }
    println!("{} {} role(s)\n", "Roles:".bold(), roles.len());
    for r in &roles {
        println!("  {} {}", "•".dimmed(), r.display.cyan());
        for p in &r.privileges {
            println!("    {} {}", "→".dimmed(), p.display.dimmed());
        }
    }
    Ok(())
}

// ── session ─────────────────────────────────────────────────────

pub async fn whoami(client: &Client) -> CmdResult {
    let session = client.get_session().await.map_err(fail)?;
    if session.authenticated {
        let user = if session.user_display.is_empty() {
            "(unnamed user)".to_string()
        } else {
            session.user_display
        };
        println!("{} {}", "●".green(), user.green().bold());
    } else {
        println!("{} {}", "●".red(), "not authenticated".red());
    }
    Ok(())
}
