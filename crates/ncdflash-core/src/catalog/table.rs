//! Static firmware tables
//!
//! Ids are strings because that is how operators and the supervising
//! process pass them. Id 22 (RFID) ships no assets and is not listed.

use super::types::{AssetLocations, Channel, FirmwareProfile, LayoutFamily};

/// Production variants
pub static STABLE: &[FirmwareProfile] = &[
    FirmwareProfile {
        id: "1",
        name: "WiFi AWS Gateway",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.us-east-1.amazonaws.com/Production_AWS/firmware.bin",
            bootloader: "https://ncd-esp32.s3.us-east-1.amazonaws.com/Production_AWS/bootloader.bin",
            partitions: "https://ncd-esp32.s3.us-east-1.amazonaws.com/Production_AWS/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.us-east-1.amazonaws.com/Production_AWS/spiffs.bin"),
        },
        family: LayoutFamily::SplitSpiffs,
        bundled: true,
    },
    FirmwareProfile {
        id: "2",
        name: "WiFi Azure Gateway",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/WiFi_Azure/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/WiFi_Azure/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/WiFi_Azure/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/WiFi_Azure/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "3",
        name: "WiFi MQTT Gateway",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/WiFi_MQTT/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/WiFi_MQTT/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/WiFi_MQTT/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/WiFi_MQTT/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "4",
        name: "WiFi Google IoT Gateway",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/WiFi_Google/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/WiFi_Google/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/WiFi_Google/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/WiFi_Google/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "5",
        name: "Mega Modem",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/Mega_Modem/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/Mega_Modem/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/Mega_Modem/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/Mega_Modem/spiffs.bin"),
        },
        family: LayoutFamily::RelocatedSpiffs,
        bundled: false,
    },
    FirmwareProfile {
        id: "6",
        name: "Cellular MQTT Gateway",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/Cellular_MQTT/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/Cellular_MQTT/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/Cellular_MQTT/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/Cellular_MQTT/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "7",
        name: "Losant Gateway",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/WiFi_Losant/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/WiFi_Losant/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/WiFi_Losant/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/WiFi_Losant/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "8",
        name: "4 Relay MirPro",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/4_Relay_MirPro/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/4_Relay_MirPro/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/4_Relay_MirPro/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/4_Relay_MirPro/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "9",
        name: "AWS WiFi Sensor",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/AWS_Sensor/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/AWS_Sensor/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/AWS_Sensor/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/AWS_Sensor/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "10",
        name: "MQTT WiFi Sensor",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/MQTT_Sensor/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/MQTT_Sensor/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/MQTT_Sensor/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/MQTT_Sensor/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "11",
        name: "Mirror PR53-4",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/Mirror_PR53-4/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/Mirror_PR53-4/bootloader-dev.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/Mirror_PR53-4/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/Mirror_PR53-4/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "12",
        name: "Azure WiFi Sensor",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/Azure_Sensor/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/Azure_Sensor/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/Azure_Sensor/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/Azure_Sensor/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "13",
        name: "Contact Closure Email Generator",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/Email_Generator/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/Email_Generator/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/Email_Generator/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/Email_Generator/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "14",
        name: "ESP XBee",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/ESP_XBee/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/ESP_XBee/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/ESP_XBee/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/ESP_XBee/spiffs.bin"),
        },
        family: LayoutFamily::RelocatedSpiffs,
        bundled: false,
    },
    FirmwareProfile {
        id: "15",
        name: "WiFi Azure Gateway Custom",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/WiFi_Azure_Custom/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/WiFi_Azure_Custom/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/WiFi_Azure_Custom/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/WiFi_Azure_Custom/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "16",
        name: "4-20mA Input Transmitter 4 channel",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/4-20_Input_Mirror_Transmitter_4_Channel/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/4-20_Input_Mirror_Transmitter_4_Channel/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/4-20_Input_Mirror_Transmitter_4_Channel/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/4-20_Input_Mirror_Transmitter_4_Channel/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "17",
        name: "Radon MN",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/radonmn_mqtt/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/radonmn_mqtt/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/radonmn_mqtt/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/radonmn_mqtt/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "18",
        name: "0-10VDC Input Transmitter 4 channel",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/0-10V_Input_Mirror_Transmitter_4_Channel/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/0-10V_Input_Mirror_Transmitter_4_Channel/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/0-10V_Input_Mirror_Transmitter_4_Channel/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/0-10V_Input_Mirror_Transmitter_4_Channel/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "19",
        name: "Goodtech 4 channel",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/Goodtech_4_Relay/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/Goodtech_4_Relay/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/Goodtech_4_Relay/partitions.bin",
            spiffs: None,
        },
        family: LayoutFamily::SpiffsDisabled,
        bundled: false,
    },
    FirmwareProfile {
        id: "20",
        name: "SOTA Relay",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/SOTA_Relay/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/SOTA_Relay/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/SOTA_Relay/partitions.bin",
            spiffs: None,
        },
        family: LayoutFamily::SpiffsDisabled,
        bundled: false,
    },
    FirmwareProfile {
        id: "21",
        name: "Goodtech 2 relay 2 dac",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/Goodtech_2_Relay_2_Dac/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/Goodtech_2_Relay_2_Dac/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/Goodtech_2_Relay_2_Dac/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/Goodtech_2_Relay_2_Dac/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "23",
        name: "MQTT V2 Temperature/Humidity Sensor",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Sensor_Temperature_Humidity/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Sensor_Temperature_Humidity/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Sensor_Temperature_Humidity/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Sensor_Temperature_Humidity/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "24",
        name: "SOTA PWM",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/SOTA_PWM/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/SOTA_PWM/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/SOTA_PWM/partitions.bin",
            spiffs: None,
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "25",
        name: "8 Input Mirror Transmitter",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/eight_input_seme_mirror/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/eight_input_seme_mirror/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/eight_input_seme_mirror/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/eight_input_seme_mirror/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "26",
        name: "Firmware Flasher",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/firmware_flasher/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/firmware_flasher/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/firmware_flasher/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/firmware_flasher/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "27",
        name: "Smart Repeater 2",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/Smart_Repeater_2/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/Smart_Repeater_2/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/Smart_Repeater_2/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/Smart_Repeater_2/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "28",
        name: "MQTT V2 Current Monitor Sensor",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Sensor_Current_Monitor/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Sensor_Current_Monitor/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Sensor_Current_Monitor/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Sensor_Current_Monitor/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "29",
        name: "4-20mA 4 Channel Output Receiver",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/4-20_Output_Mirror_Transmitter_4_Channel/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/4-20_Output_Mirror_Transmitter_4_Channel/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/4-20_Output_Mirror_Transmitter_4_Channel/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/4-20_Output_Mirror_Transmitter_4_Channel/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "30",
        name: "MQTT V2 Push Notification",
        channel: Channel::Stable,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Push_Notification/firmware.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Push_Notification/bootloader.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Push_Notification/partitions.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/ESP32_V2_Push_Notification/spiffs.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
];

/// Development variants (a subset of [`STABLE`])
pub static PRERELEASE: &[FirmwareProfile] = &[
    FirmwareProfile {
        id: "1",
        name: "WiFi AWS Gateway",
        channel: Channel::Prerelease,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/WiFi_AWS/firmware-dev.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/WiFi_AWS/bootloader-dev.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/WiFi_AWS/partitions-dev.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/WiFi_AWS/spiffs-dev.bin"),
        },
        family: LayoutFamily::SplitSpiffs,
        bundled: true,
    },
    FirmwareProfile {
        id: "2",
        name: "WiFi Azure Gateway",
        channel: Channel::Prerelease,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/WiFi_Azure/firmware-dev.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/WiFi_Azure/bootloader-dev.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/WiFi_Azure/partitions-dev.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/WiFi_Azure/spiffs-dev.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "3",
        name: "WiFi MQTT Gateway",
        channel: Channel::Prerelease,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/WiFi_MQTT/firmware-dev.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/WiFi_MQTT/bootloader-dev.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/WiFi_MQTT/partitions-dev.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/WiFi_MQTT/spiffs-dev.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "4",
        name: "WiFi Google IoT Gateway",
        channel: Channel::Prerelease,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/WiFi_Google/firmware-dev.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/WiFi_Google/bootloader-dev.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/WiFi_Google/partitions-dev.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/WiFi_Google/spiffs-dev.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
    FirmwareProfile {
        id: "5",
        name: "Mega Modem",
        channel: Channel::Prerelease,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/Mega_Modem/firmware-dev.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/Mega_Modem/bootloader-dev.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/Mega_Modem/partitions-dev.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/Mega_Modem/spiffs-dev.bin"),
        },
        family: LayoutFamily::RelocatedSpiffs,
        bundled: false,
    },
    FirmwareProfile {
        id: "6",
        name: "Cellular MQTT Gateway",
        channel: Channel::Prerelease,
        assets: AssetLocations {
            firmware: "https://ncd-esp32.s3.amazonaws.com/Cellular_MQTT/firmware-dev.bin",
            bootloader: "https://ncd-esp32.s3.amazonaws.com/Cellular_MQTT/bootloader-dev.bin",
            partitions: "https://ncd-esp32.s3.amazonaws.com/Cellular_MQTT/partitions-dev.bin",
            spiffs: Some("https://ncd-esp32.s3.amazonaws.com/Cellular_MQTT/spiffs-dev.bin"),
        },
        family: LayoutFamily::Standard,
        bundled: false,
    },
];

/// The SOTA Relay build used by `--sota`.
///
/// Kept outside the tables so it stays flashable even when lookup fails.
pub static SOTA_OVERRIDE: FirmwareProfile = FirmwareProfile {
    id: "sota",
    name: "SOTA Relay",
    channel: Channel::Stable,
    assets: AssetLocations {
        firmware: "https://ncd-esp32.s3.amazonaws.com/SOTA_Relay/firmware.bin",
        bootloader: "https://ncd-esp32.s3.amazonaws.com/SOTA_Relay/bootloader.bin",
        partitions: "https://ncd-esp32.s3.amazonaws.com/SOTA_Relay/partitions.bin",
        spiffs: None,
    },
    family: LayoutFamily::SpiffsDisabled,
    bundled: false,
};
