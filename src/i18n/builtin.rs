// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation tables shipped with the calculator.
//!
//! French is the source language: every key exists in `FR`. The other
//! tables may lag behind; lookups fall back to French for missing keys.
//!
//! Keys ending in `_plural` are plural forms picked by `plural()`, keys of
//! the form `key_context` are contextual variants picked by
//! `translate_with_context()`. Placeholders use `{name}` syntax.

/// Builtin tables in display order.
pub(crate) const TABLES: &[(&str, &[(&str, &str)])] = &[
    ("fr", FR),
    ("en", EN),
    ("ro", RO),
    ("tr", TR),
    ("de", DE),
];

// ─── French (primary language, every key is defined here) ──────────────

const FR: &[(&str, &str)] = &[
    // Header and toolbar
    ("brandSubtitle", "Optimisateur d'amélioration Metin2"),
    ("resetTitle", "Réinitialiser"),
    ("exportTitle", "Exporter"),
    // Tabs and configuration panel
    ("configTab", "Configuration"),
    ("analysisTab", "Analyse"),
    ("selectItem", "Sélection de l'objet"),
    ("searchPlaceholder", "Rechercher un objet..."),
    ("selected", "Sélectionné"),
    ("recentItems", "Objets récents"),
    ("priceConfig", "Configuration des prix"),
    ("upgradeItems", "Objets d'amélioration"),
    ("materials", "Matériaux"),
    ("runAnalysis", "Lancer l'analyse"),
    ("upgradeLevels", "Niveaux d'amélioration"),
    ("fromLevel", "De"),
    ("toLevel", "À"),
    // Analysis panel
    ("analysisResults", "Résultats de l'analyse"),
    ("optimal", "Optimale"),
    ("custom", "Personnalisée"),
    ("avgCost", "Coût moyen"),
    ("avgTrials", "Tentatives moyennes"),
    ("avgTrialsTotal", "Tentatives totales moyennes"),
    ("level", "Niveau"),
    ("trialsPerLevel", "Tentatives par niveau"),
    ("successProb", "P(succès)"),
    ("interval95", "Intervalle 5% - 95%"),
    ("upgradePath", "Chemin d'amélioration"),
    ("requiredItems", "Objets requis"),
    ("requiredMaterials", "Matériaux requis"),
    ("trialsProbability", "Tentatives vs Probabilité de succès"),
    (
        "trialsProbabilityDesc",
        "Ce graphique montre la probabilité de réussir l'amélioration en fonction du nombre de tentatives",
    ),
    // Chart
    ("chartTitle", "Analyse de probabilité d'amélioration"),
    ("chartSubtitle", "Evolution de la probabilité de succès selon le nombre de tentatives"),
    ("xAxisLabel", "Nombre de tentatives"),
    ("yAxisLabel", "Probabilité de succès (%)"),
    ("probabilityAt", "Probabilité à"),
    // Tooltips
    ("trialInterval", "Essais"),
    ("itemInterval", "Objets"),
    ("costInterval", "Coût moyen"),
    ("globalStats", "Statistiques globales"),
    ("avgRequired", "Moyenne"),
    ("itemsRequired", "Objets requis pour ce niveau"),
    ("avgItemsRequired", "Nombre moyen d'objets nécessaires"),
    // Statistics and risk
    ("totalTrials", "Essais moyens"),
    ("costRange95", "Intervalle 95%"),
    ("trialsRange95", "Intervalle 95%"),
    ("riskLevel", "Niveau de risque"),
    ("recommendation", "Recommandation"),
    ("riskLow", "Faible"),
    ("riskMedium", "Moyen"),
    ("riskHigh", "Élevé"),
    // General
    ("quantity", "Quantité"),
    ("unitCost", "Coût unitaire"),
    ("total", "Total"),
    ("calculating", "Calcul en cours..."),
    ("trials", "tentatives"),
    // Toasts
    ("selectItemFirst", "Veuillez d'abord sélectionner un objet"),
    ("analysisComplete", "Analyse terminée"),
    ("exportSuccess", "Export réussi"),
    ("errorAnalysis", "Erreur lors de l'analyse"),
    ("invalidLevelRange", "Le niveau de fin doit être supérieur au niveau de départ"),
    // Upgrade items (keyed by their French name)
    ("Parchemin de bénédiction", "Parchemin de bénédiction"),
    ("Manuel de Forgeron", "Manuel de Forgeron"),
    ("Parchemin du Dieu Dragon", "Parchemin du Dieu Dragon"),
    ("Parchemin de Guerre", "Parchemin de Guerre"),
    ("Pierre magique", "Pierre magique"),
    // Counted and contextual forms
    ("levelCount", "{count} niveau"),
    ("levelCount_plural", "{count} niveaux"),
    ("itemCount", "{count} objet"),
    ("itemCount_plural", "{count} objets"),
    ("probabilityAtTrials", "Probabilité à {trials} tentatives : {percent}"),
    ("total_cost", "Coût total"),
    ("level_short", "Niv."),
];

// ─── English ───────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("brandSubtitle", "Metin2 Upgrade Optimizer"),
    ("resetTitle", "Reset"),
    ("exportTitle", "Export"),
    ("configTab", "Configuration"),
    ("analysisTab", "Analysis"),
    ("selectItem", "Item Selection"),
    ("searchPlaceholder", "Search for an item..."),
    ("selected", "Selected"),
    ("recentItems", "Recent items"),
    ("priceConfig", "Price Configuration"),
    ("upgradeItems", "Upgrade Items"),
    ("materials", "Materials"),
    ("runAnalysis", "Run Analysis"),
    ("upgradeLevels", "Upgrade levels"),
    ("fromLevel", "From"),
    ("toLevel", "To"),
    ("analysisResults", "Analysis Results"),
    ("optimal", "Optimal"),
    ("custom", "Custom"),
    ("avgCost", "Average Cost"),
    ("avgTrials", "Average Trials"),
    ("avgTrialsTotal", "Total Average Trials"),
    ("level", "Level"),
    ("trialsPerLevel", "Trials per level"),
    ("successProb", "P(success)"),
    ("interval95", "95% Interval"),
    ("upgradePath", "Upgrade Path"),
    ("requiredItems", "Required Items"),
    ("requiredMaterials", "Required Materials"),
    ("trialsProbability", "Trials vs Success Probability"),
    (
        "trialsProbabilityDesc",
        "This graph shows the probability of successfully upgrading based on number of trials",
    ),
    ("chartTitle", "Upgrade Probability Analysis"),
    ("chartSubtitle", "Success probability evolution based on number of attempts"),
    ("xAxisLabel", "Number of attempts"),
    ("yAxisLabel", "Success probability (%)"),
    ("probabilityAt", "Probability at"),
    ("trialInterval", "Trials"),
    ("itemInterval", "Items"),
    ("costInterval", "Cost"),
    ("globalStats", "Global statistics"),
    ("avgRequired", "Average required"),
    ("itemsRequired", "Items required for this level"),
    ("avgItemsRequired", "Average number of items needed"),
    ("totalTrials", "Average Trials"),
    ("costRange95", "95% Interval"),
    ("trialsRange95", "95% Interval"),
    ("riskLevel", "Risk Level"),
    ("recommendation", "Recommendation"),
    ("riskLow", "Low"),
    ("riskMedium", "Medium"),
    ("riskHigh", "High"),
    ("quantity", "Quantity"),
    ("unitCost", "Unit Cost"),
    ("total", "Total"),
    ("calculating", "Calculating..."),
    ("trials", "trials"),
    ("selectItemFirst", "Please select an item first"),
    ("analysisComplete", "Analysis complete"),
    ("exportSuccess", "Export successful"),
    ("errorAnalysis", "Analysis error"),
    ("invalidLevelRange", "End level must be greater than start level"),
    ("Parchemin de bénédiction", "Blessing Scroll"),
    ("Manuel de Forgeron", "Blacksmith Handbook"),
    ("Parchemin du Dieu Dragon", "Dragon God Scroll"),
    ("Parchemin de Guerre", "War Scroll"),
    ("Pierre magique", "Magic Stone"),
    ("levelCount", "{count} level"),
    ("levelCount_plural", "{count} levels"),
    ("itemCount", "{count} item"),
    ("itemCount_plural", "{count} items"),
    ("probabilityAtTrials", "Probability at {trials} trials: {percent}"),
    ("total_cost", "Total cost"),
    ("level_short", "Lv."),
];

// ─── Romanian ──────────────────────────────────────────────────────────

const RO: &[(&str, &str)] = &[
    ("brandSubtitle", "Optimizator de îmbunătățire Metin2"),
    ("resetTitle", "Resetare"),
    ("exportTitle", "Export"),
    ("configTab", "Configurare"),
    ("analysisTab", "Analiză"),
    ("selectItem", "Selectarea obiectului"),
    ("searchPlaceholder", "Căutați un obiect..."),
    ("selected", "Selectat"),
    ("recentItems", "Obiecte recente"),
    ("priceConfig", "Configurare prețuri"),
    ("upgradeItems", "Obiecte de upgrade"),
    ("materials", "Materiale"),
    ("runAnalysis", "Pornește analiza"),
    ("upgradeLevels", "Niveluri de upgrade"),
    ("fromLevel", "De la"),
    ("toLevel", "La"),
    ("analysisResults", "Rezultatele analizei"),
    ("optimal", "Optimă"),
    ("custom", "Personalizată"),
    ("avgCost", "Cost mediu"),
    ("avgTrials", "Încercări medii"),
    ("avgTrialsTotal", "Încercări totale medii"),
    ("level", "Nivel"),
    ("trialsPerLevel", "Încercări per nivel"),
    ("successProb", "P(succes)"),
    ("interval95", "Interval 95%"),
    ("upgradePath", "Calea de upgrade"),
    ("requiredItems", "Obiecte necesare"),
    ("requiredMaterials", "Materiale necesare"),
    ("trialsProbability", "Încercări vs Probabilitate de succes"),
    (
        "trialsProbabilityDesc",
        "Acest grafic arată probabilitatea de a reuși upgrade-ul în funcție de numărul de încercări",
    ),
    ("chartTitle", "Analiza probabilității de upgrade"),
    ("chartSubtitle", "Evoluția probabilității de succes în funcție de numărul de încercări"),
    ("xAxisLabel", "Număr de încercări"),
    ("yAxisLabel", "Probabilitate de succes (%)"),
    ("probabilityAt", "Probabilitate la"),
    ("trialInterval", "Încercări"),
    ("itemInterval", "Obiecte"),
    ("costInterval", "Cost"),
    ("globalStats", "Statistici globale"),
    ("avgRequired", "Medie necesară"),
    ("itemsRequired", "Obiecte necesare pentru acest nivel"),
    ("avgItemsRequired", "Număr mediu de obiecte necesare"),
    ("totalTrials", "Încercări medii"),
    ("costRange95", "Interval 95%"),
    ("trialsRange95", "Interval 95%"),
    ("riskLevel", "Nivel de risc"),
    ("recommendation", "Recomandare"),
    ("riskLow", "Scăzut"),
    ("riskMedium", "Mediu"),
    ("riskHigh", "Ridicat"),
    ("quantity", "Cantitate"),
    ("unitCost", "Cost unitar"),
    ("total", "Total"),
    ("calculating", "Se calculează..."),
    ("trials", "încercări"),
    ("selectItemFirst", "Vă rugăm selectați mai întâi un obiect"),
    ("analysisComplete", "Analiză completă"),
    ("exportSuccess", "Export reușit"),
    ("errorAnalysis", "Eroare la analiză"),
    ("invalidLevelRange", "Nivelul final trebuie să fie mai mare decât nivelul de start"),
    ("Parchemin de bénédiction", "Pergament de Binecuvântare"),
    ("Manuel de Forgeron", "Manual de Fierar"),
    ("Parchemin du Dieu Dragon", "Pergament al Zeului Dragon"),
    ("Parchemin de Guerre", "Pergament de Război"),
    ("Pierre magique", "Piatră Magică"),
    ("levelCount", "{count} nivel"),
    ("levelCount_plural", "{count} niveluri"),
    ("itemCount", "{count} obiect"),
    ("itemCount_plural", "{count} obiecte"),
    ("probabilityAtTrials", "Probabilitate la {trials} încercări: {percent}"),
    ("total_cost", "Cost total"),
    ("level_short", "Niv."),
];

// ─── Turkish ───────────────────────────────────────────────────────────

const TR: &[(&str, &str)] = &[
    ("brandSubtitle", "Metin2 Yükseltme Optimizasyonu"),
    ("resetTitle", "Sıfırla"),
    ("exportTitle", "Dışa Aktar"),
    ("configTab", "Yapılandırma"),
    ("analysisTab", "Analiz"),
    ("selectItem", "Eşya Seçimi"),
    ("searchPlaceholder", "Eşya ara..."),
    ("selected", "Seçildi"),
    ("recentItems", "Son eşyalar"),
    ("priceConfig", "Fiyat Yapılandırması"),
    ("upgradeItems", "Yükseltme Eşyaları"),
    ("materials", "Malzemeler"),
    ("runAnalysis", "Analizi Başlat"),
    ("upgradeLevels", "Yükseltme seviyeleri"),
    ("fromLevel", "Başlangıç"),
    ("toLevel", "Bitiş"),
    ("analysisResults", "Analiz Sonuçları"),
    ("optimal", "Optimal"),
    ("custom", "Özel"),
    ("avgCost", "Ortalama Maliyet"),
    ("avgTrials", "Ortalama Deneme"),
    ("avgTrialsTotal", "Toplam Ortalama Deneme"),
    ("level", "Seviye"),
    ("trialsPerLevel", "Seviye başına deneme"),
    ("successProb", "P(başarı)"),
    ("interval95", "%95 Aralık"),
    ("upgradePath", "Yükseltme Yolu"),
    ("requiredItems", "Gerekli Eşyalar"),
    ("requiredMaterials", "Gerekli Malzemeler"),
    ("trialsProbability", "Deneme vs Başarı Olasılığı"),
    (
        "trialsProbabilityDesc",
        "Bu grafik, deneme sayısına göre başarıyla yükseltme olasılığını gösterir",
    ),
    ("chartTitle", "Yükseltme Olasılık Analizi"),
    ("chartSubtitle", "Deneme sayısına göre başarı olasılığının gelişimi"),
    ("xAxisLabel", "Deneme sayısı"),
    ("yAxisLabel", "Başarı olasılığı (%)"),
    ("probabilityAt", "Olasılık"),
    ("trialInterval", "Deneme"),
    ("itemInterval", "Eşya"),
    ("costInterval", "Maliyet"),
    ("globalStats", "Genel istatistikler"),
    ("avgRequired", "Ortalama gerekli"),
    ("itemsRequired", "Bu seviye için gerekli eşyalar"),
    ("avgItemsRequired", "Ortalama gerekli eşya sayısı"),
    ("totalTrials", "Ortalama Deneme"),
    ("costRange95", "%95 Aralık"),
    ("trialsRange95", "%95 Aralık"),
    ("riskLevel", "Risk Seviyesi"),
    ("recommendation", "Öneri"),
    ("riskLow", "Düşük"),
    ("riskMedium", "Orta"),
    ("riskHigh", "Yüksek"),
    ("quantity", "Miktar"),
    ("unitCost", "Birim Maliyet"),
    ("total", "Toplam"),
    ("calculating", "Hesaplanıyor..."),
    ("trials", "deneme"),
    ("selectItemFirst", "Lütfen önce bir eşya seçin"),
    ("analysisComplete", "Analiz tamamlandı"),
    ("exportSuccess", "Dışa aktarma başarılı"),
    ("errorAnalysis", "Analiz hatası"),
    ("invalidLevelRange", "Bitiş seviyesi başlangıç seviyesinden büyük olmalıdır"),
    ("Parchemin de bénédiction", "Kutsama Kağıdı"),
    ("Manuel de Forgeron", "Demirci El Kitabı"),
    ("Parchemin du Dieu Dragon", "Ejderha Tanrı Kağıdı"),
    ("Parchemin de Guerre", "Savaş Kağıdı"),
    ("Pierre magique", "Sihirli Taş"),
    ("levelCount", "{count} seviye"),
    ("levelCount_plural", "{count} seviye"),
    ("itemCount", "{count} eşya"),
    ("itemCount_plural", "{count} eşya"),
    ("probabilityAtTrials", "{trials} denemede olasılık: {percent}"),
    ("total_cost", "Toplam maliyet"),
    ("level_short", "Sv."),
];

// ─── German ────────────────────────────────────────────────────────────

const DE: &[(&str, &str)] = &[
    ("brandSubtitle", "Metin2 Verbesserungs-Optimierer"),
    ("resetTitle", "Zurücksetzen"),
    ("exportTitle", "Exportieren"),
    ("configTab", "Konfiguration"),
    ("analysisTab", "Analyse"),
    ("selectItem", "Gegenstand auswählen"),
    ("searchPlaceholder", "Gegenstand suchen..."),
    ("selected", "Ausgewählt"),
    ("recentItems", "Letzte Gegenstände"),
    ("priceConfig", "Preiskonfiguration"),
    ("upgradeItems", "Verbesserungsgegenstände"),
    ("materials", "Materialien"),
    ("runAnalysis", "Analyse starten"),
    ("upgradeLevels", "Verbesserungsstufen"),
    ("fromLevel", "Von"),
    ("toLevel", "Bis"),
    ("analysisResults", "Analyseergebnisse"),
    ("optimal", "Optimal"),
    ("custom", "Benutzerdefiniert"),
    ("avgCost", "Durchschnittskosten"),
    ("avgTrials", "Durchschn. Versuche"),
    ("avgTrialsTotal", "Gesamt Durchschn. Versuche"),
    ("level", "Stufe"),
    ("trialsPerLevel", "Versuche pro Stufe"),
    ("successProb", "P(Erfolg)"),
    ("interval95", "95% Intervall"),
    ("upgradePath", "Verbesserungspfad"),
    ("requiredItems", "Benötigte Gegenstände"),
    ("requiredMaterials", "Benötigte Materialien"),
    ("trialsProbability", "Versuche vs Erfolgswahrscheinlichkeit"),
    (
        "trialsProbabilityDesc",
        "Dieses Diagramm zeigt die Wahrscheinlichkeit einer erfolgreichen Verbesserung basierend auf der Anzahl der Versuche",
    ),
    ("chartTitle", "Verbesserungswahrscheinlichkeitsanalyse"),
    (
        "chartSubtitle",
        "Entwicklung der Erfolgswahrscheinlichkeit basierend auf der Anzahl der Versuche",
    ),
    ("xAxisLabel", "Anzahl der Versuche"),
    ("yAxisLabel", "Erfolgswahrscheinlichkeit (%)"),
    ("probabilityAt", "Wahrscheinlichkeit bei"),
    ("trialInterval", "Versuche"),
    ("itemInterval", "Gegenstände"),
    ("costInterval", "Kosten"),
    ("globalStats", "Globale Statistiken"),
    ("avgRequired", "Durchschnittlich erforderlich"),
    ("itemsRequired", "Für diese Stufe erforderliche Gegenstände"),
    ("avgItemsRequired", "Durchschnittliche Anzahl benötigter Gegenstände"),
    ("totalTrials", "Durchschn. Versuche"),
    ("costRange95", "95% Intervall"),
    ("trialsRange95", "95% Intervall"),
    ("riskLevel", "Risikoniveau"),
    ("recommendation", "Empfehlung"),
    ("riskLow", "Niedrig"),
    ("riskMedium", "Mittel"),
    ("riskHigh", "Hoch"),
    ("quantity", "Anzahl"),
    ("unitCost", "Stückkosten"),
    ("total", "Gesamt"),
    ("calculating", "Berechnung läuft..."),
    ("trials", "Versuche"),
    ("selectItemFirst", "Bitte wählen Sie zuerst einen Gegenstand aus"),
    ("analysisComplete", "Analyse abgeschlossen"),
    ("exportSuccess", "Export erfolgreich"),
    ("errorAnalysis", "Analysefehler"),
    ("invalidLevelRange", "Endstufe muss größer als Startstufe sein"),
    ("Parchemin de bénédiction", "Segensrolle"),
    ("Manuel de Forgeron", "Schmiedehandbuch"),
    ("Parchemin du Dieu Dragon", "Drachengott-Rolle"),
    ("Parchemin de Guerre", "Kriegsrolle"),
    ("Pierre magique", "Magischer Stein"),
    ("levelCount", "{count} Stufe"),
    ("levelCount_plural", "{count} Stufen"),
    ("itemCount", "{count} Gegenstand"),
    ("itemCount_plural", "{count} Gegenstände"),
    ("probabilityAtTrials", "Wahrscheinlichkeit bei {trials} Versuchen: {percent}"),
    ("total_cost", "Gesamtkosten"),
    ("level_short", "St."),
];
