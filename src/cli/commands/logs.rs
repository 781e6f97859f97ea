use crate::adb::AdbBridge;
use crate::cli::parser::Cli;
use crate::core::call_log::CallLogLogic;
use crate::errors::AppResult;
use crate::models::call_type::CallType;
use crate::models::record::CallRecord;
use crate::ui::messages;
use crate::utils::table::Table;
use crate::utils::time;
use ansi_term::Colour;

/// Run the full check → query → display sequence.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let bridge = AdbBridge::new(cli.adb.as_deref(), cli.serial.as_deref());

    let device = bridge.check_device()?;
    messages::success(format!("Device connected ({})", device.serial));

    let records = CallLogLogic::fetch(&bridge, &device);
    print_records(&records);

    Ok(())
}

fn print_records(records: &[CallRecord]) {
    if records.is_empty() {
        messages::warning("No call logs found");
        return;
    }

    let mut table = Table::new(&["Date", "Number", "Type", "Duration", "Name"]);
    for rec in records {
        table.add_row(vec![
            time::format_epoch_millis(rec.date_millis()),
            rec.number().to_string(),
            format_type_cell(rec.type_code()),
            time::format_duration(rec.duration_secs()),
            rec.name().to_string(),
        ]);
    }

    print!("{}", table.render());
}

fn colour_for_type(t: CallType) -> Colour {
    match t {
        CallType::Outgoing => Colour::Green,
        CallType::Incoming => Colour::Blue,
        CallType::Missed => Colour::Red,
        CallType::Voicemail => Colour::Yellow,
        CallType::Rejected => Colour::Cyan,
        CallType::Blocked => Colour::Purple,
    }
}

/// Unknown codes pass through raw and uncoloured.
fn format_type_cell(code: &str) -> String {
    match CallType::from_code(code) {
        Some(t) => colour_for_type(t).paint(t.label()).to_string(),
        None => code.to_string(),
    }
}
