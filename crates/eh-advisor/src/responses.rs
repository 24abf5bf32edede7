//! Canned advisor replies.
//!
//! `{name}` placeholders are filled from the profile by the responder. The
//! `**bold**` markers and line breaks are left for the display layer.

pub const GREETING: &str = "Hello! 👋 I'm your EcoHome energy advisor. Based on your profile, I can help you save money on your energy bills.\n\n**Your profile shows:**\n• Heating: {heating}\n• Hot water: {hot_water}\n• Lighting: {lighting}\n\nWhat would you like to know about? I can help with heating, water, lighting, appliances, grants, or solar panels!";

pub const GRATITUDE: &str = "You're welcome! 😊 I'm happy to help you save energy and money.\n\nIs there anything else you'd like to know about? I can provide more details on:\n• Specific product recommendations\n• Government grants you might qualify for\n• Step-by-step guides for any of the tips\n• Cost calculations for your situation";

pub const SMALL_TALK: &str = "I'm doing great, thanks for asking! 🌱 I'm here and ready to help you reduce your energy bills.\n\nBased on your answers, I estimate you could save **£150-600 per year** with the right changes. Would you like me to break down where those savings could come from?";

pub const CAPABILITIES: &str = "I'm your personal energy advisor! Here's what I can help with:\n\n**💡 Quick Tips** - Free, instant savings\n**🏠 Home Improvements** - Investments that pay off\n**💷 Government Grants** - Free upgrades you might qualify for\n**📊 Cost Calculations** - Personalised savings estimates\n**🔧 Product Advice** - What to buy and where\n\n**Just ask me things like:**\n• \"How do I reduce my heating bill?\"\n• \"What grants can I get?\"\n• \"Is my boiler too old?\"\n• \"Should I get solar panels?\"\n\nWhat interests you most?";

pub const SMART_THERMOSTAT: &str = "Great question about smart thermostats! 🌡️\n\n**Top picks for UK homes:**\n\n**Nest Learning Thermostat (£219)**\n• Learns your schedule automatically\n• Saves 10-12% on heating\n• Works with most boilers\n\n**Hive Active Heating (£179)**\n• Great app, easy to use\n• British Gas support available\n• Reliable and well-tested\n\n**tado° (£199)**\n• Best for room-by-room control\n• Add smart radiator valves\n• Geofencing included\n\nBased on your heating usage ({heating}), a smart thermostat could save you **£80-150/year**. Most pay for themselves in 18 months!\n\nWant me to explain how to install one, or compare features in more detail?";

pub const HEATING_COST: &str = "Let's cut your heating costs! 🔥 Based on your usage ({heating}), here's my plan:\n\n**FREE - Do Today:**\n• Turn thermostat down 1°C → **Save £80-100/year**\n• Only heat rooms you're using\n• Set timer to turn off 30 mins before bed\n• Close curtains at dusk to trap heat\n• Move furniture away from radiators\n\n**Under £50:**\n• Draught excluders (£15-30) → Save £25-45/year\n• Radiator reflector panels (£20) → Save £20-40/year\n• Bleed your radiators (free if DIY)\n\n**Bigger Savings:**\n• Smart thermostat (£150-220) → Save £80-150/year\n• Loft insulation → Often FREE via ECO4\n• Cavity wall insulation → Often FREE via ECO4\n\n**Your potential total savings: £200-400/year!**\n\nWhich of these would you like more detail on?";

pub const BOILER: &str = "Let's talk about your boiler! 🔧\n\n**Signs you need a new boiler:**\n• Over 15 years old\n• Frequent breakdowns\n• Yellow flame (should be blue)\n• Strange noises\n• Rising energy bills\n\n**New boiler costs:**\n• Combi boiler: £1,500-3,000 installed\n• System boiler: £2,000-3,500 installed\n• Potential savings: 20-30% on heating bills\n\n**FREE boiler schemes:**\n• ECO4: Free replacement if on benefits or low EPC\n• Boiler Upgrade Scheme: £7,500 towards heat pump\n\n**Heat pump alternative:**\n• Air source: £7,000-14,000 (minus £7,500 grant)\n• Running costs similar to gas\n• Zero carbon emissions\n\nWould you like help checking if you qualify for a free boiler replacement?";

pub const HEATING: &str = "Based on your heating usage ({heating}), here are my recommendations:\n\n**Quick wins (free):**\n• Turn thermostat down 1°C → saves £80-100/year\n• Set heating to turn off 30 mins before bed\n• Bleed radiators to remove air pockets\n• Use curtains to keep heat in\n\n**Bigger investments:**\n• Smart thermostat (£150-220) → saves £80-150/year\n• Check ECO4 eligibility for FREE insulation\n• Draught-proofing → saves £25-45/year\n\nHeating is usually 55% of energy bills, so this is where the biggest savings are!\n\nWould you like more details on any of these?";

pub const HOT_WATER: &str = "Let's reduce your hot water costs! 🚿\n\nBased on your usage ({hot_water}):\n\n**Quick wins (free):**\n• Reduce shower by 1 min → Save £45/year per person\n• Fix dripping taps → Save £18/year per tap\n• Don't leave hot tap running while washing up\n\n**Smart purchases:**\n• Low-flow showerhead (£20) → Save £70/year\n• Hot water tank jacket (£25) → Save £35/year\n• Tap aerators (£5 each) → Save £30/year\n\n**Settings to check:**\n• Set cylinder to 60°C (safe and efficient)\n• Set combi boiler flow temp to 50-55°C\n• Use eco mode on dishwasher\n\n**Did you know?**\n• 4-min shower: 40 litres, ~8p\n• Average bath: 80 litres, ~16p\n• Power shower (8 mins): 136 litres, ~27p\n\nWhat would you like more detail on?";

pub const GRANTS: &str = "Great news - there's lots of help available! 💷\n\n**ECO4 Scheme (Energy Company Obligation):**\n✅ FREE loft insulation\n✅ FREE cavity wall insulation\n✅ FREE solid wall insulation\n✅ FREE boiler replacement\n**Eligibility:** Benefits recipients OR EPC rating D-G\n\n**Boiler Upgrade Scheme:**\n✅ £7,500 off air source heat pump\n✅ £5,000 off ground source heat pump\n**Eligibility:** Any homeowner with valid EPC\n\n**Great British Insulation Scheme:**\n✅ FREE/cheap insulation\n**Eligibility:** Council tax bands A-D (England)\n\n**Warm Home Discount:**\n✅ £150 off electricity bill\n**Eligibility:** Pension Credit or low income\n\n**How to apply:**\n1. Contact your energy supplier\n2. Visit gov.uk/energy-grants\n3. Check Simple Energy Advice website\n\nWould you like me to help you check which schemes you might qualify for?";

pub const SOLAR: &str = "Let's talk solar! ☀️\n\n**Typical System (4kW):**\n• Cost: £6,000-8,000 installed\n• Annual savings: £300-500\n• Payback period: 10-15 years\n• Lifespan: 25-30 years\n\n**Earn money back:**\n• Smart Export Guarantee: 3-15p/kWh for excess\n• Best rates: Octopus (15p), Tesla (11p)\n\n**Is your home suitable?**\n✅ South-facing roof (SE/SW also good)\n✅ Minimal shading from trees/buildings\n✅ Roof in good condition\n✅ Space for 10-16 panels\n\n**Battery storage (optional):**\n• Cost: £2,500-5,000\n• Use more of your own electricity\n• Increases savings by 30-50%\n\n**Financing:**\n• 0% finance from many installers\n• Green loans from banks\n• Some local authority schemes\n\n**ROI calculation:**\nA 4kW system generates ~3,400 kWh/year\nAt 22p/kWh = £750 value\nPlus export payments = extra £100-200\n\nWant me to recommend trusted installers in your area?";

pub const APPLIANCES: &str = "Let's optimise your appliances! 🔌\n\nBased on your profile ({appliances}):\n\n**Running costs (per year):**\n• Old fridge (10+ years): £80-100\n• New A-rated fridge: £30-40\n• Old washing machine: £45\n• New A-rated: £25\n• Tumble dryer: £70-100\n• Dishwasher: £40-55\n\n**Quick wins (free):**\n• Wash at 30°C → 40% less energy\n• Full loads only → save £30/year\n• Air dry when possible → save £70/year\n• Unplug standby → save £65/year\n\n**When to replace:**\n• Fridge/freezer over 10 years old\n• Washing machine over 8 years old\n• Any appliance rated C or below\n\n**Best energy ratings:**\n• Look for A or B (new scale)\n• Check EU energy label\n• Consider running cost, not just price\n\n**Pro tip:** Your fridge should be 3-5°C, freezer at -18°C. Every degree colder uses 5% more energy!\n\nWant specific product recommendations?";

pub const LIGHTING: &str = "Let's brighten up your savings! 💡\n\nBased on your lighting ({lighting}):\n\n**Annual cost per bulb (4hrs/day):**\n• 60W incandescent: £14/year\n• 42W halogen: £10/year\n• 10W LED equivalent: £2.40/year\n\n**If you have 20 bulbs:**\n• Old bulbs: ~£200-280/year\n• All LEDs: ~£48/year\n• **Savings: £150-230/year!**\n\n**Choosing LEDs:**\n• Warm white (2700K) → living rooms, bedrooms\n• Cool white (4000K) → kitchen, bathroom\n• Daylight (5000K+) → offices, workshops\n• Check lumens, not watts (800lm ≈ 60W old bulb)\n\n**Smart additions:**\n• Motion sensors for hallways: £15-30\n• Timer switches: £10-20\n• Smart bulbs: £8-15 each\n\n**Best brands:**\n• Philips, IKEA, Osram, TCP\n• Avoid very cheap unbranded ones\n\nLED bulbs last 15-25 years, so this is a one-time investment!\n\nWant help choosing the right bulbs for each room?";

pub const INSULATION: &str = "Insulation is one of the best investments! 🏠\n\n**Savings by type:**\n• Loft insulation (270mm): **£255/year**\n• Cavity wall insulation: **£295/year**\n• Solid wall insulation: **£400/year**\n• Floor insulation: **£70/year**\n• Draught-proofing: **£45/year**\n\n**Costs & payback:**\n• Loft: £300-400 (often FREE) → 2 year payback\n• Cavity wall: £400-600 (often FREE) → 2 years\n• Solid wall: £8,000-15,000 → 15-20 years\n\n**FREE insulation:**\nECO4 scheme offers FREE insulation if you:\n• Receive certain benefits, OR\n• Have an EPC rating of D, E, F or G\n\n**DIY draught-proofing:**\n• Door excluders: £10-30\n• Letterbox brush: £5\n• Chimney balloon: £20\n• Window film: £30\n• Keyhole covers: £2\n\n**Check your loft:**\nShould be 270mm (10.5 inches) deep. If you can see the joists, you need more!\n\nWant me to help you check if you qualify for free insulation?";

pub const BILLS: &str = "Let's tackle those bills! 💰\n\n**Average UK costs (2024):**\n• Electricity: 22p per kWh\n• Gas: 5p per kWh\n• Average annual bill: £1,834\n\n**Immediate actions:**\n\n1️⃣ **Check your tariff**\n• Compare on Uswitch, MoneySupermarket\n• Fixed deals can save £100-200/year\n• Check exit fees before switching\n\n2️⃣ **Get a smart meter**\n• Free installation from your supplier\n• See real-time usage\n• More accurate bills\n\n3️⃣ **Payment method**\n• Direct debit: 5-7% cheaper\n• Monthly beats quarterly\n\n**Based on your profile:**\n{bills_heating_line}\n{bills_lighting_line}\n{bills_appliance_line}\n\n**If struggling to pay:**\n• Warm Home Discount: £150 off\n• Priority Services Register (free)\n• Contact supplier for payment plan\n\nWant me to estimate your potential savings?";

pub const SAVE_ENERGY: &str = "Here's your complete energy-saving plan! 🌱\n\n**Based on your profile, focus on these:**\n\n**1. Heating (55% of bills)**\n{plan_heating}\n• Thermostat down 1°C = £80-100 saved\n• Smart thermostat = £80-150 saved\n\n**2. Hot Water (17% of bills)**\n{plan_hot_water}\n• Shorter showers = £45/person saved\n• Low-flow showerhead = £70 saved\n\n**3. Appliances (15% of bills)**\n{plan_appliances}\n• Kill standby = £65 saved\n• Wash at 30°C = £30 saved\n\n**4. Lighting (5% of bills)**\n{plan_lighting}\n• Full LED switch = £150+ saved\n\n**Your potential total: £300-600/year!**\n\nWant me to create a step-by-step action plan for you?";

pub const TIPS: &str = "Here are my top personalised tips for you! 💡\n\n**Your Quick Wins (do today, free):**\n1. {tip_heating}\n2. {tip_hot_water}\n3. {tip_lighting}\n4. Unplug standby devices → £65/year\n5. Only boil the water you need → £13/year\n\n**This Week:**\n• Check your energy tariff - could save £200/year\n• Bleed your radiators\n• Check loft insulation depth\n\n**This Month:**\n• Apply for ECO4 grants (potentially free insulation)\n• Consider a smart thermostat\n• Replace any bulbs over 5 years old with LED\n\nWant me to go deeper on any of these?";

/// Returned when no rule matches.
pub const MENU: &str = "Great question! Let me help you with that. 🌱\n\n**Based on your energy profile:**\n• Heating: {heating}\n• Hot water: {hot_water}\n• Cooking: {cooking}\n• Lighting: {lighting}\n• Appliances: {appliances}\n\n**I can help you with:**\n• 🔥 Heating costs and efficiency\n• 🚿 Hot water savings\n• 💡 Lighting upgrades\n• 🔌 Appliance efficiency\n• 💷 Government grants (ECO4, etc.)\n• ☀️ Solar panels\n• 🏠 Insulation options\n• 💰 Bill reduction strategies\n\n**Try asking:**\n• \"How can I reduce my heating bill?\"\n• \"What grants am I eligible for?\"\n• \"Should I get solar panels?\"\n• \"Are my appliances too old?\"\n• \"Give me your best tips\"\n\nWhat would you like to explore?";

/// First assistant message of every transcript.
pub const WELCOME: &str = "Hello! I'm your EcoHome energy advisor. Based on your profile, I've prepared some recommendations above. Feel free to ask me anything about saving energy, reducing costs, or making your home more sustainable.";
