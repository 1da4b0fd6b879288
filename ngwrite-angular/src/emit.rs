//! Writes serialized configs and routes through a [`TextWriter`].
//!
//! Every config is serialized before anything is written, so a failed call
//! leaves the writer as it was.

use ngwrite_codegen::TextWriter;
use ngwrite_manifest::{Config, Route};

use crate::{Property, PropertySerializer, Result, ast::string_literal};

/// Write one indented `key: value` line per property, with a comma after
/// all but the last.
pub fn write_properties<W: TextWriter + ?Sized>(writer: &mut W, properties: &[Property]) {
    let last = properties.len().saturating_sub(1);
    for (i, property) in properties.iter().enumerate() {
        writer.write_indent();
        writer.write(property.key());
        writer.write(": ");
        writer.write(property.value());
        if i < last {
            writer.write(",");
        }
        writer.write_end_of_line();
    }
}

fn write_config<W: TextWriter + ?Sized>(
    writer: &mut W,
    serializer: PropertySerializer,
    config: &Config,
) -> Result<()> {
    let properties = serializer.serialize(config)?;
    write_properties(writer, &properties);
    Ok(())
}

fn write_decorator<W: TextWriter>(
    writer: &mut W,
    name: &str,
    serializer: PropertySerializer,
    config: &Config,
) -> Result<()> {
    let properties = serializer.serialize(config)?;
    writer.write_decorator_block(name, |w| {
        write_properties(w, &properties);
        Ok(())
    })
}

/// Write the properties of a component config.
pub fn write_component_config<W: TextWriter + ?Sized>(writer: &mut W, config: &Config) -> Result<()> {
    write_config(writer, PropertySerializer::component(), config)
}

/// Write the properties of an NgModule config.
pub fn write_module_config<W: TextWriter + ?Sized>(writer: &mut W, config: &Config) -> Result<()> {
    write_config(writer, PropertySerializer::module(), config)
}

/// Write the properties of a directive config.
pub fn write_directive_config<W: TextWriter + ?Sized>(writer: &mut W, config: &Config) -> Result<()> {
    write_config(writer, PropertySerializer::directive(), config)
}

/// Write the properties of an application config (`providers`, ...).
pub fn write_application_config<W: TextWriter + ?Sized>(
    writer: &mut W,
    config: &Config,
) -> Result<()> {
    write_config(writer, PropertySerializer::application(), config)
}

/// Write `@Component({ ... })`.
pub fn write_component_decorator<W: TextWriter>(writer: &mut W, config: &Config) -> Result<()> {
    write_decorator(writer, "Component", PropertySerializer::component(), config)
}

/// Write `@NgModule({ ... })`.
pub fn write_module_decorator<W: TextWriter>(writer: &mut W, config: &Config) -> Result<()> {
    write_decorator(writer, "NgModule", PropertySerializer::module(), config)
}

/// Write `@Directive({ ... })`.
pub fn write_directive_decorator<W: TextWriter>(writer: &mut W, config: &Config) -> Result<()> {
    write_decorator(writer, "Directive", PropertySerializer::directive(), config)
}

/// Write a route object literal, followed by a comma.
pub fn write_route<W: TextWriter + ?Sized>(writer: &mut W, route: &Route) {
    writer.write_line("{");
    writer.increase_indent();
    writer.write_line(&format!("path: {},", string_literal(&route.path)));
    writer.write_line(&format!("component: {}", route.component_name));
    writer.decrease_indent();
    writer.write_line("},");
}

/// Write `export const routes: Routes = [ ... ];`.
pub fn write_routes<W: TextWriter + ?Sized>(writer: &mut W, routes: &[Route]) {
    writer.write_line("export const routes: Routes = [");
    writer.increase_indent();
    for route in routes {
        write_route(writer, route);
    }
    writer.decrease_indent();
    writer.write_line("];");
}
